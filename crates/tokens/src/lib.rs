pub mod preset;
pub mod registry;
pub mod session;
pub mod set;

pub use preset::Preset;
pub use session::SessionState;
pub use set::{Mode, ThemeStyles, TokenSet};
