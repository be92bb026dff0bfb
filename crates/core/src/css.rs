//! CSS custom-property import and export.
//!
//! Import is best-effort over arbitrary pasted text: custom properties
//! under a light scope (`:root`, plain selectors, bare declarations) land
//! in the light map, those under a dark scope (`.dark`,
//! `[data-theme="dark"]`, or a `prefers-color-scheme: dark` media block)
//! in the dark map. Unknown property names are retained verbatim so an
//! export→import round trip is lossless for registered and unregistered
//! keys alike. Malformed input degrades: an unbalanced block contributes
//! nothing, it never raises.

use themeloom_tokens::{ThemeStyles, TokenSet};

/// Partial per-mode token maps recovered from stylesheet text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssImport {
    pub light: TokenSet,
    pub dark: TokenSet,
}

impl CssImport {
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// View as a partial style pair for the external merge path.
    pub fn into_styles(self) -> ThemeStyles {
        ThemeStyles {
            light: self.light,
            dark: self.dark,
        }
    }
}

/// Parse pasted or uploaded stylesheet text into partial token maps.
pub fn parse_css_input(text: &str) -> CssImport {
    let stripped = strip_comments(text);
    let mut import = CssImport::default();
    scan_blocks(&stripped, false, &mut import);
    import
}

/// Render a style pair as importable CSS. Iteration order is the token
/// sets' canonical order.
pub fn to_css(styles: &ThemeStyles) -> String {
    let mut out = String::new();
    out.push_str(":root {\n");
    for (key, value) in styles.light.iter() {
        out.push_str(&format!("  --{key}: {value};\n"));
    }
    out.push_str("}\n\n.dark {\n");
    for (key, value) in styles.dark.iter() {
        out.push_str(&format!("  --{key}: {value};\n"));
    }
    out.push_str("}\n");
    out
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            // Unclosed comment swallows the remainder.
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Walk `text` one prelude at a time. A `;` at this level terminates a bare
/// declaration; a `{` opens a block whose scope is decided by its selector
/// (dark scopes are sticky through nesting, so `:root` inside a dark media
/// block stays dark).
fn scan_blocks(text: &str, dark_scope: bool, import: &mut CssImport) {
    let mut rest = text;
    loop {
        let Some(stop) = rest.find(['{', ';']) else {
            // Trailing declaration without a terminator.
            record_declaration(rest, dark_scope, import);
            return;
        };
        let (prelude, after) = rest.split_at(stop);
        if after.starts_with(';') {
            record_declaration(prelude, dark_scope, import);
            rest = &after[1..];
            continue;
        }

        let body_and_rest = &after[1..];
        let Some(close) = matching_brace(body_and_rest) else {
            // Unbalanced block: the affected scope yields nothing.
            return;
        };
        let body = &body_and_rest[..close];
        let child_dark = dark_scope || is_dark_selector(prelude);
        scan_blocks(body, child_dark, import);
        rest = &body_and_rest[close + 1..];
    }
}

/// Byte offset of the `}` closing the block that just opened, accounting
/// for nested blocks. `None` when unbalanced.
fn matching_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

fn is_dark_selector(selector: &str) -> bool {
    let selector = selector.trim();
    if selector.contains(".dark") || selector.contains("[data-theme=\"dark\"]") {
        return true;
    }
    selector.starts_with("@media")
        && selector.contains("prefers-color-scheme")
        && selector.contains("dark")
}

/// Record one `--name: value` declaration. Anything else (regular
/// properties, stray selector text, empty fragments) is skipped.
fn record_declaration(fragment: &str, dark_scope: bool, import: &mut CssImport) {
    let Some((name, value)) = fragment.split_once(':') else {
        return;
    };
    let Some(key) = name.trim().strip_prefix("--") else {
        return;
    };
    let value = value.trim().trim_end_matches("!important").trim();
    if key.is_empty() || value.is_empty() {
        return;
    }
    let target = if dark_scope {
        &mut import.dark
    } else {
        &mut import.light
    };
    target.set(key, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_block_maps_to_light() {
        let import = parse_css_input(":root { --background: #ffffff; --primary: oklch(0.2 0 0); }");
        assert_eq!(import.light.get("background"), Some("#ffffff"));
        assert_eq!(import.light.get("primary"), Some("oklch(0.2 0 0)"));
        assert!(import.dark.is_empty());
    }

    #[test]
    fn dark_selectors_map_to_dark() {
        let css = r#"
            :root { --background: #ffffff; }
            .dark { --background: #111111; }
            [data-theme="dark"] { --primary: #222222; }
        "#;
        let import = parse_css_input(css);
        assert_eq!(import.light.get("background"), Some("#ffffff"));
        assert_eq!(import.dark.get("background"), Some("#111111"));
        assert_eq!(import.dark.get("primary"), Some("#222222"));
    }

    #[test]
    fn dark_media_block_is_sticky_through_nesting() {
        let css = r#"
            @media (prefers-color-scheme: dark) {
                :root { --background: #0a0a0a; }
            }
        "#;
        let import = parse_css_input(css);
        assert!(import.light.is_empty());
        assert_eq!(import.dark.get("background"), Some("#0a0a0a"));
    }

    #[test]
    fn bare_declarations_default_to_light() {
        let import = parse_css_input("--radius: 0.5rem;\n--spacing: 0.25rem;");
        assert_eq!(import.light.get("radius"), Some("0.5rem"));
        assert_eq!(import.light.get("spacing"), Some("0.25rem"));
    }

    #[test]
    fn unknown_properties_are_retained_verbatim() {
        let import = parse_css_input(":root { --brand-glow: 0 0 24px #ff00ff; }");
        assert_eq!(import.light.get("brand-glow"), Some("0 0 24px #ff00ff"));
    }

    #[test]
    fn non_custom_properties_are_ignored() {
        let import = parse_css_input(":root { color: red; --primary: #123456; }");
        assert_eq!(import.light.len(), 1);
        assert_eq!(import.light.get("primary"), Some("#123456"));
    }

    #[test]
    fn comments_are_stripped() {
        let import = parse_css_input(":root { /* surface */ --card: #fafafa; }");
        assert_eq!(import.light.get("card"), Some("#fafafa"));
    }

    #[test]
    fn unbalanced_block_degrades_to_empty() {
        let import = parse_css_input(".dark { --background: #111111");
        assert!(import.dark.is_empty());
        // Complete blocks before the damage still parse.
        let import = parse_css_input(":root { --primary: #222222; } .dark { --x: y");
        assert_eq!(import.light.get("primary"), Some("#222222"));
        assert!(import.dark.is_empty());
    }

    #[test]
    fn garbage_yields_empty_maps() {
        assert!(parse_css_input("not css at all").is_empty());
        assert!(parse_css_input("").is_empty());
    }

    #[test]
    fn export_import_round_trip_is_lossless() {
        let mut styles = crate::presets::default_styles().clone();
        styles.light.set("brand-glow", "#ff00ff");
        styles.dark.set("brand-glow", "#aa00aa");

        let css = to_css(&styles);
        let import = parse_css_input(&css);

        assert_eq!(import.light, styles.light);
        assert_eq!(import.dark, styles.dark);
    }

    #[test]
    fn important_suffix_is_dropped() {
        let import = parse_css_input(":root { --primary: #336699 !important; }");
        assert_eq!(import.light.get("primary"), Some("#336699"));
    }
}
