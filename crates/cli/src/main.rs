//! Command-line driver for the themeloom engine: inspect presets, emit
//! resolved CSS, import stylesheets, and round-trip share payloads.

#![allow(clippy::print_stdout)]

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use themeloom_core::session::EditorSession;
use themeloom_core::{codec, color, contrast, css, presets};
use themeloom_tokens::Mode;

const USAGE: &str = "Usage: themeloom <command>

Commands:
  presets                    list the preset catalog
  css <preset-id>            print the preset's resolved CSS
  import <file.css>          merge a stylesheet over the defaults, print CSS
  share <preset-id>          print a URL-safe share payload for the preset
  open <payload>             decode a share payload and summarize it
  check <preset-id> [mode]   run the WCAG AA contrast report (default: light)
  convert <color> <format>   re-render a color (hex, rgb, hsl, oklch)";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    match (command.as_str(), &args[1..]) {
        ("presets", []) => cmd_presets(),
        ("css", [id]) => cmd_css(id),
        ("import", [path]) => cmd_import(Path::new(path)),
        ("share", [id]) => cmd_share(id),
        ("open", [payload]) => cmd_open(payload),
        ("check", [id]) => cmd_check(id, Mode::Light),
        ("check", [id, mode]) => cmd_check(id, parse_mode(mode)?),
        ("convert", [value, format]) => cmd_convert(value, format),
        _ => bail!("unrecognized arguments\n\n{USAGE}"),
    }
}

fn parse_mode(raw: &str) -> Result<Mode> {
    match raw {
        "light" => Ok(Mode::Light),
        "dark" => Ok(Mode::Dark),
        other => bail!("unknown mode {other:?} (expected light or dark)"),
    }
}

fn session_for(preset_id: &str) -> Result<EditorSession> {
    EditorSession::with_preset(preset_id)
        .with_context(|| format!("preset {preset_id:?} is not in the catalog"))
}

fn cmd_presets() -> Result<()> {
    for preset in presets::catalog() {
        let overrides = preset.styles.light.len() + preset.styles.dark.len();
        println!("{:<12} {} ({} overrides)", preset.id, preset.label, overrides);
    }
    Ok(())
}

fn cmd_css(preset_id: &str) -> Result<()> {
    let session = session_for(preset_id)?;
    print!("{}", css::to_css(&session.state().styles));
    Ok(())
}

fn cmd_import(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let import = css::parse_css_input(&text);
    if import.is_empty() {
        bail!("no custom properties found in {}", path.display());
    }

    let mut session = EditorSession::new();
    session.apply_import(&import.into_styles());
    print!("{}", css::to_css(&session.state().styles));
    Ok(())
}

fn cmd_share(preset_id: &str) -> Result<()> {
    let session = session_for(preset_id)?;
    println!("{}", codec::encode(session.state()));
    Ok(())
}

fn cmd_open(payload: &str) -> Result<()> {
    let state = codec::decode(payload).context("share payload did not decode")?;
    println!(
        "mode: {}  preset: {}  light tokens: {}  dark tokens: {}",
        state.current_mode,
        state.active_preset_id.as_deref().unwrap_or("(none)"),
        state.styles.light.len(),
        state.styles.dark.len(),
    );
    Ok(())
}

fn cmd_check(preset_id: &str, mode: Mode) -> Result<()> {
    let mut session = session_for(preset_id)?;
    session.set_mode(mode);

    let pairs = contrast::pairs_for_set(session.current_tokens());
    let report = contrast::evaluate(&pairs);

    if report.is_passing() {
        println!(
            "{} ({mode}): {} pairs pass at threshold {}",
            preset_id, report.checked, report.threshold
        );
    } else {
        println!(
            "{} ({mode}): {} of {} pairs fail at threshold {}",
            preset_id,
            report.failures.len(),
            report.checked,
            report.threshold
        );
        for failure in &report.failures {
            println!("  {} (ratio {:.2})", failure.label, failure.ratio);
        }
    }
    Ok(())
}

fn cmd_convert(value: &str, format: &str) -> Result<()> {
    let format = color::ColorFormat::from_str(format)
        .with_context(|| format!("unknown format {format:?}"))?;
    println!("{}", color::convert(value, format));
    Ok(())
}
