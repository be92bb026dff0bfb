use serde::{Deserialize, Serialize};

use crate::set::{Mode, ThemeStyles};

/// The complete observable state of one edit session.
///
/// Created once per session (from defaults, a decoded share payload, or the
/// persisted document), then mutated only through the session state holder.
/// Field names follow the persisted document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub styles: ThemeStyles,
    pub current_mode: Mode,
    /// The preset this session last started from. Informational once manual
    /// edits diverge; consumers never re-validate it on read.
    pub active_preset_id: Option<String>,
}

impl SessionState {
    pub fn new(styles: ThemeStyles, mode: Mode, active_preset_id: Option<String>) -> Self {
        Self {
            styles,
            current_mode: mode,
            active_preset_id,
        }
    }
}
