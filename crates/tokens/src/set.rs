use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry;

/// The two rendering modes a theme carries token values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// The opposite mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token key → value map for one mode.
///
/// Backed by a `BTreeMap` so iteration and serialization order are canonical
/// regardless of insertion order; the session codec depends on this.
/// A set may be partial (preset overrides, CSS imports) until it passes
/// through the merge resolver; afterwards it covers the whole registry.
/// Unregistered keys are carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet(BTreeMap<String, String>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from static key/value pairs (preset and default tables).
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` onto `self`: keys present in `other` overwrite,
    /// absent keys are preserved. This is the `⊕` of the merge resolver.
    pub fn overlay(&mut self, other: &TokenSet) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Whether every registered key has a value.
    pub fn is_complete(&self) -> bool {
        registry::registered_keys().all(|k| self.0.contains_key(k))
    }

    /// Registered keys this set is missing.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        registry::registered_keys()
            .filter(|k| !self.0.contains_key(*k))
            .collect()
    }
}

impl FromIterator<(String, String)> for TokenSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The full light/dark pair. After merge resolution both sides span the
/// entire registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeStyles {
    pub light: TokenSet,
    pub dark: TokenSet,
}

impl ThemeStyles {
    pub fn for_mode(&self, mode: Mode) -> &TokenSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn for_mode_mut(&mut self, mode: Mode) -> &mut TokenSet {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    /// Whether both modes cover the whole registry.
    pub fn is_complete(&self) -> bool {
        self.light.is_complete() && self.dark.is_complete()
    }
}
