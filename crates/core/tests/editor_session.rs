//! Integration test: drive a full edit session (preset, manual edits,
//! undo/redo, share codec, boot) and verify each observable state.

use themeloom_core::session::{ApplyTarget, EditorSession};
use themeloom_core::store::{self, BootSource, MemoryStore};
use themeloom_core::{codec, css, merge, presets};
use themeloom_tokens::Mode;

#[test]
fn sunset_session_with_undo_redo() {
    // Start a session from the "sunset" preset (its dark partial is empty).
    let mut session = EditorSession::with_preset("sunset").expect("sunset is in the catalog");
    let sunset = presets::find_preset("sunset").expect("catalog entry");
    assert!(sunset.styles.dark.is_empty());

    // Dark inherits the preset's light overrides.
    let light_background = session.state().styles.light.get("background").map(str::to_string);
    assert_eq!(
        session.state().styles.dark.get("background"),
        light_background.as_deref(),
        "dark background should inherit the sunset light background"
    );

    let preset_dark_primary = session
        .state()
        .styles
        .dark
        .get("primary")
        .expect("complete after resolve")
        .to_string();

    // Edit dark primary: background untouched, one new history entry.
    session.set_token("primary", "#ff2266", ApplyTarget::Dark);
    assert_eq!(session.state().styles.dark.get("primary"), Some("#ff2266"));
    assert_eq!(
        session.state().styles.dark.get("background"),
        light_background.as_deref()
    );
    assert_eq!(session.history_len(), 2);
    assert_eq!(session.history_cursor(), 1);

    // Undo returns to the preset resolution.
    assert!(session.undo());
    assert_eq!(session.history_cursor(), 0);
    assert_eq!(
        session.state().styles.dark.get("primary"),
        Some(preset_dark_primary.as_str())
    );

    // Redo restores the edit.
    assert!(session.redo());
    assert_eq!(session.history_cursor(), 1);
    assert_eq!(session.state().styles.dark.get("primary"), Some("#ff2266"));
}

#[test]
fn share_payload_restores_a_session_elsewhere() {
    let mut session = EditorSession::with_preset("midnight").expect("catalog entry");
    session.set_token("accent", "oklch(0.8 0.1 200)", ApplyTarget::Both);
    session.set_mode(Mode::Dark);

    let payload = codec::encode(session.state());

    // A second host boots from the payload alone.
    let outcome = store::boot(Box::new(MemoryStore::new()), Some(&payload));
    assert_eq!(outcome.source, BootSource::SharePayload);
    assert!(outcome.share_error.is_none());

    let restored = outcome.session;
    assert_eq!(restored.state(), session.state());
    assert_eq!(restored.mode(), Mode::Dark);
    // The restored session starts a fresh local history.
    assert!(!restored.can_undo());
}

#[test]
fn css_export_feeds_back_through_import() {
    let mut session = EditorSession::with_preset("meadow").expect("catalog entry");
    session.set_token("chart-1", "#00aa77", ApplyTarget::Light);

    let exported = css::to_css(&session.state().styles);
    let import = css::parse_css_input(&exported);

    // Importing what we exported reproduces the styles exactly: both sides
    // were complete, so the defaults backfill has nothing left to add.
    let merged = merge::merge_with_defaults(&import.clone().into_styles());
    assert_eq!(&merged, &session.state().styles);

    let mut other = EditorSession::new();
    other.apply_import(&import.into_styles());
    assert_eq!(&other.state().styles, &session.state().styles);
}

#[test]
fn decode_failure_never_disturbs_an_existing_session() {
    let mut session = EditorSession::new();
    session.set_token("primary", "#224466", ApplyTarget::Light);
    let before = session.state().clone();

    assert!(codec::decode("definitely-not-a-payload").is_err());
    assert_eq!(session.state(), &before);
    assert_eq!(session.history_len(), 2);
}
