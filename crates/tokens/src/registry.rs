//! The fixed, closed registry of design token keys.
//!
//! Every complete [`TokenSet`](crate::TokenSet) carries a value for each key
//! listed here. Sets may additionally hold unregistered keys (CSS imports
//! and payloads written by newer registries pass through verbatim), but the
//! merge resolver only guarantees coverage of this list.

/// Semantic color tokens. Values are CSS color text in any notation the
/// color engine understands (hex, rgb, hsl, oklch).
pub const COLOR_KEYS: &[&str] = &[
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "chart-1",
    "chart-2",
    "chart-3",
    "chart-4",
    "chart-5",
    "sidebar",
    "sidebar-foreground",
    "sidebar-primary",
    "sidebar-primary-foreground",
    "sidebar-accent",
    "sidebar-accent-foreground",
    "sidebar-border",
    "sidebar-ring",
];

/// Font stack tokens. Values are CSS `font-family` lists.
pub const FONT_KEYS: &[&str] = &["font-sans", "font-serif", "font-mono"];

/// Scalar layout tokens (lengths, multipliers).
pub const METRIC_KEYS: &[&str] = &["radius", "spacing", "letter-spacing"];

/// Box-shadow parameter tokens, combined by consumers into shadow values.
pub const SHADOW_KEYS: &[&str] = &[
    "shadow-color",
    "shadow-opacity",
    "shadow-blur",
    "shadow-spread",
    "shadow-offset-x",
    "shadow-offset-y",
];

/// All registered keys, in registry order.
pub fn registered_keys() -> impl Iterator<Item = &'static str> {
    COLOR_KEYS
        .iter()
        .chain(FONT_KEYS)
        .chain(METRIC_KEYS)
        .chain(SHADOW_KEYS)
        .copied()
}

/// Number of registered keys.
pub fn registered_len() -> usize {
    COLOR_KEYS.len() + FONT_KEYS.len() + METRIC_KEYS.len() + SHADOW_KEYS.len()
}

/// Whether `key` belongs to the registry.
pub fn is_registered(key: &str) -> bool {
    registered_keys().any(|k| k == key)
}

/// Whether `key` names a color token (candidates for contrast checks and
/// color-format conversion).
pub fn is_color_key(key: &str) -> bool {
    COLOR_KEYS.contains(&key) || key == "shadow-color"
}
