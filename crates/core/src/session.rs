//! The session state holder.
//!
//! `EditorSession` is an explicit handle passed to every consumer; reads go
//! through [`state`](EditorSession::state) and resolve at call time, so a
//! message built around the handle always observes live edits without any
//! ambient global. Mutation is single-writer by construction (`&mut self`).
//!
//! Every operation that changes observable state records a history
//! snapshot and fire-and-forgets a persistence write. Operations that
//! would change nothing record nothing.

use themeloom_tokens::{Mode, SessionState, ThemeStyles, TokenSet};
use thiserror::Error;

use crate::history::{HistoryStack, HistoryState};
use crate::store::SessionStore;
use crate::{codec, merge, presets};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown preset id: {0:?}")]
    UnknownPreset(String),
}

/// Which mode(s) a token write lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyTarget {
    Light,
    Dark,
    Both,
}

impl From<Mode> for ApplyTarget {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::Light,
            Mode::Dark => Self::Dark,
        }
    }
}

pub struct EditorSession {
    state: SessionState,
    history: HistoryStack,
    store: Option<Box<dyn SessionStore>>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("history_cursor", &self.history.cursor())
            .field("persisted", &self.store.is_some())
            .finish()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// A session starting from the canonical defaults.
    pub fn new() -> Self {
        Self::from_state(SessionState::new(
            presets::default_styles().clone(),
            Mode::Light,
            None,
        ))
    }

    /// A session starting from an already-complete state (decoded payload
    /// or persisted document). Seeds history with it.
    pub fn from_state(state: SessionState) -> Self {
        Self {
            history: HistoryStack::new(state.clone()),
            state,
            store: None,
        }
    }

    /// A session starting from a catalog preset.
    pub fn with_preset(id: &str) -> Result<Self, SessionError> {
        let styles = merge::resolve_preset_id(id)
            .ok_or_else(|| SessionError::UnknownPreset(id.to_string()))?;
        Ok(Self::from_state(SessionState::new(
            styles,
            Mode::Light,
            Some(id.to_string()),
        )))
    }

    /// Attach the host storage; subsequent accepted mutations write through.
    pub fn attach_store(&mut self, store: Box<dyn SessionStore>) {
        self.store = Some(store);
    }

    /// The live state, resolved at call time.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.current_mode
    }

    /// Token set for the mode currently being previewed.
    pub fn current_tokens(&self) -> &TokenSet {
        self.state.styles.for_mode(self.state.current_mode)
    }

    // --- operations ---

    /// Replace the styles with a resolved catalog preset. Unknown ids fail
    /// synchronously and leave state untouched.
    pub fn apply_preset(&mut self, id: &str) -> Result<(), SessionError> {
        let styles = merge::resolve_preset_id(id)
            .ok_or_else(|| SessionError::UnknownPreset(id.to_string()))?;
        tracing::debug!(preset = id, "applying preset");
        let mut next = self.state.clone();
        next.styles = styles;
        next.active_preset_id = Some(id.to_string());
        self.commit(next);
        Ok(())
    }

    /// Overlay edited tokens onto the targeted mode(s).
    pub fn set_tokens(&mut self, partial: &TokenSet, target: ApplyTarget) {
        let mut next = self.state.clone();
        match target {
            ApplyTarget::Light => next.styles.light.overlay(partial),
            ApplyTarget::Dark => next.styles.dark.overlay(partial),
            ApplyTarget::Both => {
                next.styles.light.overlay(partial);
                next.styles.dark.overlay(partial);
            }
        }
        self.commit(next);
    }

    /// Single-token convenience for picker-style edits.
    pub fn set_token(&mut self, key: &str, value: &str, target: ApplyTarget) {
        let mut partial = TokenSet::new();
        partial.set(key, value);
        self.set_tokens(&partial, target);
    }

    /// Switch the previewed mode.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.state.current_mode == mode {
            return;
        }
        tracing::debug!(previous = %self.state.current_mode, next = %mode, "switching mode");
        let mut next = self.state.clone();
        next.current_mode = mode;
        self.commit(next);
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.state.current_mode.toggle());
    }

    /// Recompute the active preset's resolution, discarding manual edits
    /// made since it was applied. With no active preset (or one that has
    /// left the catalog) this returns to the canonical defaults.
    pub fn reset_to_active_preset(&mut self) {
        let styles = match self.state.active_preset_id.as_deref() {
            Some(id) => merge::resolve_preset_id(id).unwrap_or_else(|| {
                tracing::warn!(preset = id, "active preset missing from catalog; resetting to defaults");
                presets::default_styles().clone()
            }),
            None => presets::default_styles().clone(),
        };
        let mut next = self.state.clone();
        next.styles = styles;
        self.commit(next);
    }

    /// Merge an imported token pair (CSS import) through the external path:
    /// each mode backfilled from the defaults, no cross-mode inheritance.
    pub fn apply_import(&mut self, partial: &ThemeStyles) {
        self.apply_external(partial);
    }

    /// Merge a generated token pair. Same external path as imports; the
    /// generation coordinator is responsible for discarding superseded
    /// results before this is reached.
    pub fn apply_generated(&mut self, partial: &ThemeStyles) {
        self.apply_external(partial);
    }

    fn apply_external(&mut self, partial: &ThemeStyles) {
        let mut next = self.state.clone();
        next.styles = merge::merge_with_defaults(partial);
        self.commit(next);
    }

    // --- history ---

    /// Restore the previous snapshot. Restoring never records new history.
    /// Returns `false` (a reported no-op) at the start of history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.state = snapshot;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Re-apply the next snapshot; mirror of [`undo`](Self::undo).
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.state = snapshot;
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }

    // --- internals ---

    /// Accept `next` if it changes observable state: record a snapshot and
    /// write through to storage.
    fn commit(&mut self, next: SessionState) {
        if next == self.state {
            return;
        }
        self.history.record(next.clone());
        self.state = next;
        self.persist();
    }

    /// Fire-and-forget write of the current state. Failures are logged and
    /// never interrupt the edit flow.
    fn persist(&self) {
        if let Some(store) = &self.store {
            let document = codec::to_document_json(&self.state);
            if let Err(err) = store.save(&document) {
                tracing::warn!(%err, "session persistence write failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_complete_and_inert() {
        let session = EditorSession::new();
        assert!(session.state().styles.is_complete());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.history_state(), HistoryState::Neither);
    }

    #[test]
    fn unknown_preset_leaves_state_unchanged() {
        let mut session = EditorSession::new();
        let before = session.state().clone();
        let err = session.apply_preset("vaporwave").unwrap_err();
        assert!(matches!(err, SessionError::UnknownPreset(id) if id == "vaporwave"));
        assert_eq!(session.state(), &before);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn apply_preset_records_and_sets_active_id() {
        let mut session = EditorSession::new();
        session.apply_preset("sunset").unwrap();
        assert_eq!(session.state().active_preset_id.as_deref(), Some("sunset"));
        assert_eq!(session.history_len(), 2);
        assert!(session.can_undo());
    }

    #[test]
    fn set_token_targets_one_mode() {
        let mut session = EditorSession::new();
        session.set_token("primary", "#ff0000", ApplyTarget::Dark);
        assert_eq!(session.state().styles.dark.get("primary"), Some("#ff0000"));
        assert_ne!(session.state().styles.light.get("primary"), Some("#ff0000"));
    }

    #[test]
    fn set_tokens_both_targets_both_modes() {
        let mut session = EditorSession::new();
        let partial = TokenSet::from_pairs(&[("radius", "1rem")]);
        session.set_tokens(&partial, ApplyTarget::Both);
        assert_eq!(session.state().styles.light.get("radius"), Some("1rem"));
        assert_eq!(session.state().styles.dark.get("radius"), Some("1rem"));
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn no_op_mutations_record_nothing() {
        let mut session = EditorSession::new();
        session.set_mode(Mode::Light);
        let value = session.state().styles.light.get("radius").unwrap().to_string();
        session.set_token("radius", &value, ApplyTarget::Light);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn set_mode_is_observable_state() {
        let mut session = EditorSession::new();
        session.set_mode(Mode::Dark);
        assert_eq!(session.mode(), Mode::Dark);
        assert_eq!(session.history_len(), 2);
        session.undo();
        assert_eq!(session.mode(), Mode::Light);
    }

    #[test]
    fn reset_discards_manual_edits_since_preset() {
        let mut session = EditorSession::with_preset("sunset").unwrap();
        let preset_primary = session.state().styles.light.get("primary").unwrap().to_string();

        session.set_token("primary", "#000001", ApplyTarget::Light);
        session.set_token("accent", "#000002", ApplyTarget::Light);
        session.reset_to_active_preset();

        assert_eq!(
            session.state().styles.light.get("primary"),
            Some(preset_primary.as_str())
        );
    }

    #[test]
    fn reset_without_active_preset_returns_to_defaults() {
        let mut session = EditorSession::new();
        session.set_token("background", "#101010", ApplyTarget::Both);
        session.reset_to_active_preset();
        assert_eq!(&session.state().styles, presets::default_styles());
    }

    #[test]
    fn import_backfills_from_defaults_not_current_edits() {
        let mut session = EditorSession::new();
        session.set_token("accent", "#0000ff", ApplyTarget::Light);

        let import = ThemeStyles {
            light: TokenSet::from_pairs(&[("primary", "#123123")]),
            dark: TokenSet::from_pairs(&[("primary", "#321321")]),
        };
        session.apply_import(&import);

        assert_eq!(session.state().styles.light.get("primary"), Some("#123123"));
        assert_eq!(session.state().styles.dark.get("primary"), Some("#321321"));
        // The external path is defaults-based: the earlier manual edit is
        // part of history, not of the merged result.
        assert_eq!(
            session.state().styles.light.get("accent"),
            presets::default_styles().light.get("accent")
        );
        assert!(session.undo());
        assert_eq!(session.state().styles.light.get("accent"), Some("#0000ff"));
    }

    #[test]
    fn undo_then_edit_discards_redo() {
        let mut session = EditorSession::new();
        session.set_token("primary", "#111111", ApplyTarget::Light);
        session.set_token("primary", "#222222", ApplyTarget::Light);
        session.undo();
        assert!(session.can_redo());

        session.set_token("primary", "#333333", ApplyTarget::Light);
        assert!(!session.can_redo());
        assert_eq!(session.state().styles.light.get("primary"), Some("#333333"));
    }

    #[test]
    fn undo_at_boundary_reports_no_op() {
        let mut session = EditorSession::new();
        assert!(!session.undo());
        assert!(!session.redo());
    }

    #[test]
    fn restoring_history_generates_no_history() {
        let mut session = EditorSession::new();
        session.set_token("primary", "#111111", ApplyTarget::Light);
        let len = session.history_len();
        session.undo();
        session.redo();
        assert_eq!(session.history_len(), len);
    }
}
