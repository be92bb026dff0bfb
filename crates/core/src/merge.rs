//! Defaults and preset merge resolution.
//!
//! `⊕` is [`TokenSet::overlay`]: present keys on the right overwrite the
//! left, absent keys are preserved, and because the left operand is always
//! the canonical defaults the result spans the full registry.
//!
//! The two paths deliberately differ on dark inheritance:
//! - presets: `dark = defaults.dark ⊕ preset.light ⊕ preset.dark`, since
//!   hand-authored presets routinely omit redundant dark values;
//! - external sources (generated, imported, decoded payloads):
//!   `mode = defaults[mode] ⊕ partial[mode]`, each mode independent, since
//!   those sources are expected to speak for both modes explicitly.

use themeloom_tokens::{Preset, ThemeStyles, TokenSet};

use crate::presets;

/// Resolve a preset into a complete light/dark pair.
pub fn resolve_preset(preset: &Preset) -> ThemeStyles {
    let defaults = presets::default_styles();

    let mut light = defaults.light.clone();
    light.overlay(&preset.styles.light);

    let mut dark = defaults.dark.clone();
    dark.overlay(&preset.styles.light);
    dark.overlay(&preset.styles.dark);

    ThemeStyles { light, dark }
}

/// Resolve a preset by catalog id. `None` for unknown ids.
pub fn resolve_preset_id(id: &str) -> Option<ThemeStyles> {
    presets::find_preset(id).map(resolve_preset)
}

/// Backfill an externally produced partial pair from the canonical
/// defaults, per mode, with no cross-mode inheritance.
pub fn merge_with_defaults(partial: &ThemeStyles) -> ThemeStyles {
    let defaults = presets::default_styles();

    let mut light = defaults.light.clone();
    light.overlay(&partial.light);

    let mut dark = defaults.dark.clone();
    dark.overlay(&partial.dark);

    ThemeStyles { light, dark }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themeloom_tokens::Mode;

    #[test]
    fn merge_is_total_for_any_partial() {
        let partial = ThemeStyles {
            light: TokenSet::from_pairs(&[("primary", "#ff0000")]),
            dark: TokenSet::new(),
        };
        let merged = merge_with_defaults(&partial);
        for mode in [Mode::Light, Mode::Dark] {
            assert!(
                merged.for_mode(mode).is_complete(),
                "{mode} side missing {:?}",
                merged.for_mode(mode).missing_keys()
            );
        }
        assert_eq!(merged.light.get("primary"), Some("#ff0000"));
    }

    #[test]
    fn external_merge_never_inherits_across_modes() {
        let partial = ThemeStyles {
            light: TokenSet::from_pairs(&[("background", "#123456")]),
            dark: TokenSet::new(),
        };
        let merged = merge_with_defaults(&partial);
        assert_eq!(
            merged.dark.get("background"),
            presets::default_styles().dark.get("background"),
        );
    }

    #[test]
    fn unregistered_keys_survive_external_merge() {
        let partial = ThemeStyles {
            light: TokenSet::from_pairs(&[("brand-glow", "#ff00ff")]),
            dark: TokenSet::new(),
        };
        let merged = merge_with_defaults(&partial);
        assert_eq!(merged.light.get("brand-glow"), Some("#ff00ff"));
    }

    #[test]
    fn preset_dark_inherits_light_overrides() {
        let preset = Preset::new(
            "test",
            "Test",
            ThemeStyles {
                light: TokenSet::from_pairs(&[("background", "#fafafa"), ("primary", "#112233")]),
                dark: TokenSet::new(),
            },
        );
        let resolved = resolve_preset(&preset);
        // Empty dark partial: dark equals defaults.dark ⊕ preset.light.
        assert_eq!(resolved.dark.get("background"), Some("#fafafa"));
        assert_eq!(resolved.dark.get("primary"), Some("#112233"));
        assert!(resolved.is_complete());
    }

    #[test]
    fn preset_dark_overrides_win_over_inherited_light() {
        let preset = Preset::new(
            "test",
            "Test",
            ThemeStyles {
                light: TokenSet::from_pairs(&[("primary", "#112233")]),
                dark: TokenSet::from_pairs(&[("primary", "#445566")]),
            },
        );
        let resolved = resolve_preset(&preset);
        assert_eq!(resolved.light.get("primary"), Some("#112233"));
        assert_eq!(resolved.dark.get("primary"), Some("#445566"));
    }

    #[test]
    fn unknown_preset_id_is_none() {
        assert!(resolve_preset_id("no-such-preset").is_none());
    }

    #[test]
    fn default_preset_resolves_to_canonical_defaults() {
        let resolved = resolve_preset_id("default").unwrap();
        assert_eq!(&resolved, presets::default_styles());
    }
}
