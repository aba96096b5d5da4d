//! Session flow integration tests
//!
//! Walks the full search → select → customize → generate → download →
//! reset flow through the reducer, plus property tests for the pre-network
//! validation and the download filename.

use bytes::Bytes;
use proptest::prelude::*;
use tokensmith_core::{
    token_filename, validate_query, Action, Card, Color, Panel, Session, TokenError,
};

fn card(name: &str) -> Card {
    Card {
        name: name.to_string(),
        mana_cost: Some("{W}".to_string()),
        type_line: Some("Creature — Human Soldier".to_string()),
        image_uris: None,
        card_faces: None,
    }
}

// ============================================================================
// End-to-end flow
// ============================================================================

/// The full happy path: search "Soldier", two hits, select the first,
/// set 1/1, generate, preview, download, reset.
#[test]
fn full_token_flow() {
    let mut session = Session::default();
    assert_eq!(session.panel, Panel::Search);

    // Server returned 2 of 2 matching cards
    session = session.apply(Action::SetQuery("Soldier".to_string()));
    session = session.apply(Action::ResultsLoaded {
        cards: vec![card("Soldier of the Pantheon"), card("Veteran Swordsmith")],
        total: 2,
    });
    assert_eq!(session.panel, Panel::Results);
    assert_eq!(session.results.len(), 2);

    // Select card #1
    let choice = session.results[0].clone();
    session = session.apply(Action::Select(choice));
    assert_eq!(session.panel, Panel::Customize);

    // Customize and build the request
    session = session.apply(Action::SetPower("1".to_string()));
    session = session.apply(Action::SetToughness("1".to_string()));
    let request = session.token_request().unwrap();
    assert_eq!(request.card_name, "Soldier of the Pantheon");
    assert_eq!(request.power, "1");
    assert_eq!(request.toughness, "1");
    assert_eq!(request.subtype, "");

    // Server returned PNG bytes
    session = session.apply(Action::TokenGenerated(Bytes::from_static(b"\x89PNG\r\n")));
    assert_eq!(session.panel, Panel::Preview);

    // Download with a fixed clock
    let download = session.download(1_700_000_000_000).unwrap();
    assert_eq!(download.filename, "mtg-token-1700000000000.png");
    assert_eq!(&download.bytes[..], b"\x89PNG\r\n");

    // Reset returns to a pristine session
    session = session.apply(Action::Reset);
    assert_eq!(session, Session::default());
}

/// Download is repeatable while the blob is held, and gone after reset.
#[test]
fn download_per_generated_blob() {
    let session = Session::default()
        .apply(Action::Select(card("Soldier")))
        .apply(Action::TokenGenerated(Bytes::from_static(b"png")));

    assert!(session.download(1).is_ok());
    assert!(session.download(2).is_ok());

    let session = session.apply(Action::Reset);
    assert!(matches!(
        session.download(3),
        Err(TokenError::Precondition(_))
    ));
}

/// Generating without a selection is refused before any request is built.
#[test]
fn generate_refused_without_selection() {
    let session = Session::default().apply(Action::ResultsLoaded {
        cards: vec![card("a")],
        total: 1,
    });
    assert!(matches!(
        session.token_request(),
        Err(TokenError::Precondition(_))
    ));
}

/// A failed request produces no action, so the session is untouched; only
/// a successful response transitions the panel.
#[test]
fn failure_leaves_session_unchanged() {
    let before = Session::default()
        .apply(Action::SetQuery("Soldier".to_string()))
        .apply(Action::ResultsLoaded {
            cards: vec![card("a")],
            total: 1,
        })
        .apply(Action::Select(card("a")));

    // No action is applied on a failure path; the session must compare
    // equal to what it was before the call started.
    let after = before.clone();
    assert_eq!(before, after);
    assert_eq!(after.panel, Panel::Customize);
    assert!(after.generated.is_none());
}

/// Reset from every panel lands in the same pristine state.
#[test]
fn reset_from_any_panel() {
    let sessions = [
        Session::default(),
        Session::default().apply(Action::ResultsLoaded {
            cards: vec![card("a")],
            total: 1,
        }),
        Session::default().apply(Action::Select(card("a"))),
        Session::default().apply(Action::TokenGenerated(Bytes::from_static(b"png"))),
    ];

    for session in sessions {
        assert_eq!(session.apply(Action::Reset), Session::default());
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Whitespace-only queries always fail validation, so they can never
    /// reach the network.
    #[test]
    fn whitespace_queries_never_validate(query in "[ \t\r\n]*") {
        prop_assert!(matches!(
            validate_query(&query),
            Err(TokenError::Validation(_))
        ));
    }

    /// Non-blank queries validate to their trimmed form.
    #[test]
    fn queries_validate_to_trimmed(inner in "[a-zA-Z0-9' ]*[a-zA-Z0-9']+", pad in "[ \t]*") {
        let padded = format!("{pad}{inner}{pad}");
        prop_assert_eq!(validate_query(&padded).unwrap(), inner.trim());
    }

    /// Download filenames always match `mtg-token-<digits>.png`.
    #[test]
    fn filenames_are_timestamp_shaped(ms in 0i64..=i64::MAX) {
        let name = token_filename(ms);
        prop_assert!(name.starts_with("mtg-token-"));
        prop_assert!(name.ends_with(".png"));
        let digits = &name["mtg-token-".len()..name.len() - ".png".len()];
        prop_assert!(!digits.is_empty());
        prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    /// Toggling a color twice is a no-op, whatever was set before.
    #[test]
    fn color_double_toggle_roundtrips(which in 0usize..5) {
        let color = Color::all()[which];
        let start = Session::default().apply(Action::ToggleColor(Color::White));
        let toggled = start
            .clone()
            .apply(Action::ToggleColor(color))
            .apply(Action::ToggleColor(color));
        prop_assert_eq!(start, toggled);
    }
}
