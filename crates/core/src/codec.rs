//! Session transport codec.
//!
//! The full session serializes to a versioned JSON document, deflates, and
//! base64-encodes with the URL-safe alphabet (no padding), so the result
//! can sit in a query parameter without further escaping. Decoding inverts the
//! pipeline and then re-runs the external-merge backfill, so a payload
//! captured against an older, smaller token registry still yields a
//! complete session under the current one.

use std::io::{Read, Write};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use themeloom_tokens::SessionState;

use crate::merge;

/// Current persisted/shared document version.
pub const DOCUMENT_VERSION: u32 = 1;

/// The envelope written to storage and compressed into share payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDocument {
    pub version: u32,
    pub state: SessionState,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("payload failed to decompress: {0}")]
    Compression(#[from] std::io::Error),
    #[error("session document is malformed: {0}")]
    Document(#[from] serde_json::Error),
    #[error("unsupported session document version {found} (newest known is {})", DOCUMENT_VERSION)]
    UnsupportedVersion { found: u32 },
}

/// Serialize a session into the plain JSON document form used by storage.
///
/// Token maps are BTree-backed, so the output is canonical for a given
/// state. Serialization of these plain string types cannot fail in
/// practice; if it ever does the failure is logged and an empty document
/// is returned, mirroring the encode path's soft degradation.
pub fn to_document_json(state: &SessionState) -> String {
    let document = SessionDocument {
        version: DOCUMENT_VERSION,
        state: state.clone(),
    };
    match serde_json::to_string(&document) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(%err, "session document serialization failed");
            String::new()
        }
    }
}

/// Parse a plain JSON document, verify its version, and backfill the styles
/// against the current registry.
pub fn from_document_json(json: &str) -> Result<SessionState, DecodeError> {
    let document: SessionDocument = serde_json::from_str(json)?;
    if document.version > DOCUMENT_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: document.version,
        });
    }
    let mut state = document.state;
    state.styles = merge::merge_with_defaults(&state.styles);
    Ok(state)
}

/// Encode a session as URL-safe compressed text.
///
/// On the (unreachable in practice) serialization failure this returns an
/// empty string after logging, so callers never interrupt the edit flow.
pub fn encode(state: &SessionState) -> String {
    let json = to_document_json(state);
    if json.is_empty() {
        return String::new();
    }
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    let compressed = match encoder.write_all(json.as_bytes()) {
        Ok(()) => encoder.finish(),
        Err(err) => Err(err),
    };
    match compressed {
        Ok(bytes) => URL_SAFE_NO_PAD.encode(bytes),
        Err(err) => {
            tracing::error!(%err, "session payload compression failed");
            String::new()
        }
    }
}

/// Decode a share payload back into a complete session state.
///
/// Fails without touching any existing state; the caller decides whether
/// to surface the error and keep its current session.
pub fn decode(payload: &str) -> Result<SessionState, DecodeError> {
    let compressed = URL_SAFE_NO_PAD.decode(payload.trim())?;
    let mut json = String::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_string(&mut json)?;
    from_document_json(&json)
}
