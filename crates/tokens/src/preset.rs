use serde::{Deserialize, Serialize};

use crate::set::ThemeStyles;

/// A catalog entry: a named partial theme used as an edit starting point.
///
/// `styles` may omit any number of keys and may omit the dark side entirely;
/// the merge resolver backfills from the canonical defaults, with dark
/// inheriting the preset's light overrides before its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub styles: ThemeStyles,
}

impl Preset {
    pub fn new(id: impl Into<String>, label: impl Into<String>, styles: ThemeStyles) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            styles,
        }
    }
}
