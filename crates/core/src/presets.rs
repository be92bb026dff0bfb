//! Canonical defaults and the built-in preset catalog.
//!
//! Both are process-wide static data behind `OnceLock`: immutable after
//! first access, keyed by a fixed id set. The `"default"` entry is
//! synthetic: its partial styles are empty, so resolving it yields the
//! canonical defaults unchanged.

use std::sync::OnceLock;

use themeloom_tokens::{Preset, ThemeStyles, TokenSet};

static DEFAULT_STYLES: OnceLock<ThemeStyles> = OnceLock::new();
static CATALOG: OnceLock<Vec<Preset>> = OnceLock::new();

/// The canonical default theme. Complete in both modes; every merge result
/// is an overlay on top of this.
pub fn default_styles() -> &'static ThemeStyles {
    DEFAULT_STYLES.get_or_init(|| ThemeStyles {
        light: TokenSet::from_pairs(DEFAULT_LIGHT),
        dark: TokenSet::from_pairs(DEFAULT_DARK),
    })
}

/// The immutable preset catalog, loaded once per process.
pub fn catalog() -> &'static [Preset] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a catalog entry by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    catalog().iter().find(|p| p.id == id)
}

/// Stable ids of every catalog entry.
pub fn preset_ids() -> Vec<&'static str> {
    catalog().iter().map(|p| p.id.as_str()).collect()
}

const DEFAULT_LIGHT: &[(&str, &str)] = &[
    ("background", "oklch(1 0 0)"),
    ("foreground", "oklch(0.145 0 0)"),
    ("card", "oklch(1 0 0)"),
    ("card-foreground", "oklch(0.145 0 0)"),
    ("popover", "oklch(1 0 0)"),
    ("popover-foreground", "oklch(0.145 0 0)"),
    ("primary", "oklch(0.205 0 0)"),
    ("primary-foreground", "oklch(0.985 0 0)"),
    ("secondary", "oklch(0.97 0 0)"),
    ("secondary-foreground", "oklch(0.205 0 0)"),
    ("muted", "oklch(0.97 0 0)"),
    ("muted-foreground", "oklch(0.556 0 0)"),
    ("accent", "oklch(0.97 0 0)"),
    ("accent-foreground", "oklch(0.205 0 0)"),
    ("destructive", "oklch(0.577 0.245 27.325)"),
    ("destructive-foreground", "oklch(0.985 0 0)"),
    ("border", "oklch(0.922 0 0)"),
    ("input", "oklch(0.922 0 0)"),
    ("ring", "oklch(0.708 0 0)"),
    ("chart-1", "oklch(0.646 0.222 41.116)"),
    ("chart-2", "oklch(0.6 0.118 184.704)"),
    ("chart-3", "oklch(0.398 0.07 227.392)"),
    ("chart-4", "oklch(0.828 0.189 84.429)"),
    ("chart-5", "oklch(0.769 0.188 70.08)"),
    ("sidebar", "oklch(0.985 0 0)"),
    ("sidebar-foreground", "oklch(0.145 0 0)"),
    ("sidebar-primary", "oklch(0.205 0 0)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.97 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.205 0 0)"),
    ("sidebar-border", "oklch(0.922 0 0)"),
    ("sidebar-ring", "oklch(0.708 0 0)"),
    ("font-sans", "ui-sans-serif, system-ui, sans-serif"),
    ("font-serif", "ui-serif, Georgia, serif"),
    ("font-mono", "ui-monospace, SFMono-Regular, monospace"),
    ("radius", "0.625rem"),
    ("spacing", "0.25rem"),
    ("letter-spacing", "0em"),
    ("shadow-color", "oklch(0 0 0)"),
    ("shadow-opacity", "0.1"),
    ("shadow-blur", "3px"),
    ("shadow-spread", "0px"),
    ("shadow-offset-x", "0"),
    ("shadow-offset-y", "1px"),
];

const DEFAULT_DARK: &[(&str, &str)] = &[
    ("background", "oklch(0.145 0 0)"),
    ("foreground", "oklch(0.985 0 0)"),
    ("card", "oklch(0.205 0 0)"),
    ("card-foreground", "oklch(0.985 0 0)"),
    ("popover", "oklch(0.205 0 0)"),
    ("popover-foreground", "oklch(0.985 0 0)"),
    ("primary", "oklch(0.922 0 0)"),
    ("primary-foreground", "oklch(0.205 0 0)"),
    ("secondary", "oklch(0.269 0 0)"),
    ("secondary-foreground", "oklch(0.985 0 0)"),
    ("muted", "oklch(0.269 0 0)"),
    ("muted-foreground", "oklch(0.708 0 0)"),
    ("accent", "oklch(0.269 0 0)"),
    ("accent-foreground", "oklch(0.985 0 0)"),
    ("destructive", "oklch(0.704 0.191 22.216)"),
    ("destructive-foreground", "oklch(0.985 0 0)"),
    ("border", "oklch(1 0 0 / 0.1)"),
    ("input", "oklch(1 0 0 / 0.15)"),
    ("ring", "oklch(0.556 0 0)"),
    ("chart-1", "oklch(0.488 0.243 264.376)"),
    ("chart-2", "oklch(0.696 0.17 162.48)"),
    ("chart-3", "oklch(0.769 0.188 70.08)"),
    ("chart-4", "oklch(0.627 0.265 303.9)"),
    ("chart-5", "oklch(0.645 0.246 16.439)"),
    ("sidebar", "oklch(0.205 0 0)"),
    ("sidebar-foreground", "oklch(0.985 0 0)"),
    ("sidebar-primary", "oklch(0.488 0.243 264.376)"),
    ("sidebar-primary-foreground", "oklch(0.985 0 0)"),
    ("sidebar-accent", "oklch(0.269 0 0)"),
    ("sidebar-accent-foreground", "oklch(0.985 0 0)"),
    ("sidebar-border", "oklch(1 0 0 / 0.1)"),
    ("sidebar-ring", "oklch(0.556 0 0)"),
    ("font-sans", "ui-sans-serif, system-ui, sans-serif"),
    ("font-serif", "ui-serif, Georgia, serif"),
    ("font-mono", "ui-monospace, SFMono-Regular, monospace"),
    ("radius", "0.625rem"),
    ("spacing", "0.25rem"),
    ("letter-spacing", "0em"),
    ("shadow-color", "oklch(0 0 0)"),
    ("shadow-opacity", "0.1"),
    ("shadow-blur", "3px"),
    ("shadow-spread", "0px"),
    ("shadow-offset-x", "0"),
    ("shadow-offset-y", "1px"),
];

fn build_catalog() -> Vec<Preset> {
    vec![
        // Synthetic entry: resolving it yields the canonical defaults.
        Preset::new("default", "Default", ThemeStyles::default()),
        Preset::new(
            "sunset",
            "Sunset",
            ThemeStyles {
                light: TokenSet::from_pairs(&[
                    ("background", "oklch(0.985 0.012 84)"),
                    ("foreground", "oklch(0.28 0.052 35)"),
                    ("primary", "oklch(0.637 0.208 35.5)"),
                    ("primary-foreground", "oklch(0.99 0.01 84)"),
                    ("accent", "oklch(0.85 0.094 75)"),
                    ("accent-foreground", "oklch(0.3 0.07 40)"),
                    ("ring", "oklch(0.637 0.208 35.5)"),
                    ("chart-1", "oklch(0.637 0.208 35.5)"),
                    ("chart-2", "oklch(0.72 0.16 55)"),
                ]),
                // No dark side: dark inherits the light overrides.
                dark: TokenSet::new(),
            },
        ),
        Preset::new(
            "midnight",
            "Midnight",
            ThemeStyles {
                light: TokenSet::from_pairs(&[
                    ("primary", "oklch(0.45 0.18 275)"),
                    ("primary-foreground", "oklch(0.985 0 0)"),
                    ("ring", "oklch(0.45 0.18 275)"),
                    ("accent", "oklch(0.93 0.03 275)"),
                    ("accent-foreground", "oklch(0.3 0.1 275)"),
                ]),
                dark: TokenSet::from_pairs(&[
                    ("background", "oklch(0.13 0.028 262)"),
                    ("card", "oklch(0.17 0.03 262)"),
                    ("popover", "oklch(0.17 0.03 262)"),
                    ("primary", "oklch(0.62 0.17 275)"),
                    ("accent", "oklch(0.25 0.06 275)"),
                    ("accent-foreground", "oklch(0.93 0.03 275)"),
                ]),
            },
        ),
        Preset::new(
            "meadow",
            "Meadow",
            ThemeStyles {
                light: TokenSet::from_pairs(&[
                    ("background", "oklch(0.99 0.008 140)"),
                    ("primary", "oklch(0.52 0.14 150)"),
                    ("primary-foreground", "oklch(0.985 0.01 140)"),
                    ("accent", "oklch(0.92 0.05 140)"),
                    ("accent-foreground", "oklch(0.3 0.08 150)"),
                    ("ring", "oklch(0.52 0.14 150)"),
                ]),
                dark: TokenSet::from_pairs(&[
                    ("background", "oklch(0.15 0.02 150)"),
                    ("primary", "oklch(0.68 0.14 150)"),
                    ("primary-foreground", "oklch(0.14 0.03 150)"),
                ]),
            },
        ),
    ]
}
