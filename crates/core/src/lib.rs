//! Theme editing engine.
//!
//! Everything flows around one [`EditorSession`] handle:
//!
//! ```text
//!   preset catalog ─┐
//!   CSS import    ──┤                        ┌─▶ contrast validator
//!   generated set ──┼─▶ merge ─▶ EditorSession ──▶ history (undo/redo)
//!   share payload ──┘  resolver      │
//!                                    └─▶ codec ─▶ URL payload / storage
//! ```
//!
//! Token values are opaque CSS text; the color engine re-renders them
//! between notations and the contrast validator checks foreground/
//! background pairs against WCAG AA. The codec compresses the whole
//! session into a URL-safe string and backfills older payloads against
//! the current registry on the way in.

pub mod cancel;
pub mod codec;
pub mod color;
pub mod contrast;
pub mod css;
pub mod generate;
pub mod history;
pub mod merge;
pub mod presets;
pub mod session;
pub mod store;

pub use cancel::{CancellationSource, CancellationToken};
pub use codec::{DecodeError, SessionDocument};
pub use color::{Color, ColorFormat, ColorParseError};
pub use contrast::{ContrastPair, ContrastReport, ContrastScheduler};
pub use css::CssImport;
pub use generate::{GenerationCoordinator, GenerationOutcome, GenerationTicket};
pub use history::{HistoryStack, HistoryState};
pub use session::{ApplyTarget, EditorSession, SessionError};
pub use store::{BootOutcome, BootSource, MemoryStore, SessionStore};
