//! Host storage interface and session boot.
//!
//! The engine never owns durability: it reads one persisted JSON document
//! at boot and writes it back after each accepted mutation, through
//! whatever [`SessionStore`] the host provides (browser storage, a file,
//! memory). Boot precedence: share payload, then persisted document, then
//! canonical defaults.

use std::io;
use std::sync::Mutex;

use crate::codec::{self, DecodeError};
use crate::session::EditorSession;

/// The host storage seam. `save` is fire-and-forget from the session's
/// perspective; ordering guarantees are whatever the backing store offers.
pub trait SessionStore: Send {
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, document: &str) -> io::Result<()>;
}

/// In-memory store for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cell: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            cell: Mutex::new(Some(document.into())),
        }
    }

    /// The last saved document, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.cell.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.snapshot())
    }

    fn save(&self, document: &str) -> io::Result<()> {
        *self.cell.lock().unwrap_or_else(|e| e.into_inner()) = Some(document.to_string());
        Ok(())
    }
}

// Shared handle so a caller can keep observing what the session writes.
impl SessionStore for std::sync::Arc<MemoryStore> {
    fn load(&self) -> io::Result<Option<String>> {
        self.as_ref().load()
    }

    fn save(&self, document: &str) -> io::Result<()> {
        self.as_ref().save(document)
    }
}

/// Where the booted session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootSource {
    SharePayload,
    Persisted,
    Defaults,
}

/// Result of [`boot`]. `share_error` carries the user-visible decode
/// failure when a payload was present but rejected; the session still
/// boots from the fallback.
#[derive(Debug)]
pub struct BootOutcome {
    pub session: EditorSession,
    pub source: BootSource,
    pub share_error: Option<DecodeError>,
}

/// Boot a session against the host store.
///
/// A decodable share payload overwrites the persisted document and wins.
/// A rejected payload is discarded (surfaced via `share_error`) and boot
/// falls back to the persisted document, then to defaults. Corrupt
/// persisted documents are logged and discarded the same way.
pub fn boot(store: Box<dyn SessionStore>, share_payload: Option<&str>) -> BootOutcome {
    let mut share_error = None;

    if let Some(payload) = share_payload {
        match codec::decode(payload) {
            Ok(state) => {
                if let Err(err) = store.save(&codec::to_document_json(&state)) {
                    tracing::warn!(%err, "failed to persist shared session at boot");
                }
                let mut session = EditorSession::from_state(state);
                session.attach_store(store);
                return BootOutcome {
                    session,
                    source: BootSource::SharePayload,
                    share_error: None,
                };
            }
            Err(err) => {
                tracing::warn!(%err, "discarding undecodable share payload");
                share_error = Some(err);
            }
        }
    }

    match store.load() {
        Ok(Some(document)) => match codec::from_document_json(&document) {
            Ok(state) => {
                let mut session = EditorSession::from_state(state);
                session.attach_store(store);
                return BootOutcome {
                    session,
                    source: BootSource::Persisted,
                    share_error,
                };
            }
            Err(err) => {
                tracing::warn!(%err, "discarding corrupt persisted session document");
            }
        },
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(%err, "persisted session read failed");
        }
    }

    let mut session = EditorSession::new();
    session.attach_store(store);
    BootOutcome {
        session,
        source: BootSource::Defaults,
        share_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use themeloom_tokens::Mode;

    use crate::session::ApplyTarget;

    #[test]
    fn boot_without_anything_uses_defaults() {
        let outcome = boot(Box::new(MemoryStore::new()), None);
        assert_eq!(outcome.source, BootSource::Defaults);
        assert!(outcome.share_error.is_none());
        assert!(outcome.session.state().styles.is_complete());
    }

    #[test]
    fn boot_prefers_valid_share_payload_and_overwrites_store() {
        let mut donor = EditorSession::new();
        donor.set_token("primary", "#abcdef", ApplyTarget::Light);
        donor.set_mode(Mode::Dark);
        let payload = codec::encode(donor.state());

        let store = Arc::new(MemoryStore::new());
        let outcome = boot(Box::new(Arc::clone(&store)), Some(&payload));
        assert_eq!(outcome.source, BootSource::SharePayload);
        assert_eq!(outcome.session.state(), donor.state());

        // The share payload replaced the persisted document.
        let saved = store.snapshot().expect("share payload persisted at boot");
        let persisted = codec::from_document_json(&saved).unwrap();
        assert_eq!(&persisted, donor.state());

        let reboot = boot(Box::new(Arc::clone(&store)), None);
        assert_eq!(reboot.source, BootSource::Persisted);
        assert_eq!(reboot.session.state(), donor.state());
    }

    #[test]
    fn bad_share_payload_surfaces_error_and_falls_back() {
        let mut donor = EditorSession::new();
        donor.set_token("accent", "#00ff00", ApplyTarget::Dark);
        let persisted = codec::to_document_json(donor.state());

        let outcome = boot(Box::new(MemoryStore::with_document(persisted)), Some("%%%"));
        assert_eq!(outcome.source, BootSource::Persisted);
        assert!(outcome.share_error.is_some());
        assert_eq!(
            outcome.session.state().styles.dark.get("accent"),
            Some("#00ff00")
        );
    }

    #[test]
    fn corrupt_persisted_document_falls_back_to_defaults() {
        let outcome = boot(Box::new(MemoryStore::with_document("{not json")), None);
        assert_eq!(outcome.source, BootSource::Defaults);
    }

    #[test]
    fn mutations_write_through_after_boot() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let outcome = boot(Box::new(Arc::clone(&store)), None);
        let mut session = outcome.session;
        session.set_token("primary", "#424242", ApplyTarget::Light);

        let document = store.snapshot().expect("mutation should persist");
        let persisted = codec::from_document_json(&document).unwrap();
        assert_eq!(persisted.styles.light.get("primary"), Some("#424242"));

        // Undo is an accepted mutation too.
        session.undo();
        let document = store.snapshot().unwrap();
        let persisted = codec::from_document_json(&document).unwrap();
        assert_ne!(persisted.styles.light.get("primary"), Some("#424242"));
    }
}
