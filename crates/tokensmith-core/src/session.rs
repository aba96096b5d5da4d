//! Session state machine for the token studio.
//!
//! The UI holds a single [`Session`] value. Every interaction that changes
//! state becomes an [`Action`]; applying it returns the next session, so a
//! transition can never leave the old and new state visible at once. Failed
//! requests produce no action and leave the session as it was.

use std::collections::BTreeSet;

use bytes::Bytes;

use crate::api::TokenRequest;
use crate::card::Card;
use crate::error::{TokenError, TokenResult};

/// The five mana colors offered by the customization form.
///
/// The toggles are client-side only: the generate payload does not carry
/// them (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub fn label(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }

    /// Single-letter mana symbol
    pub fn letter(&self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }

    pub fn all() -> &'static [Color] {
        &[
            Color::White,
            Color::Blue,
            Color::Black,
            Color::Red,
            Color::Green,
        ]
    }
}

/// Which section of the studio is visible.
///
/// Exactly one of the Results/Customize/Preview sections shows at a time;
/// `Search` shows none of them, only the always-present search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// Initial state, nothing below the search bar
    #[default]
    Search,
    /// Search results listed for selection
    Results,
    /// Customization form for the selected card
    Customize,
    /// Generated token preview
    Preview,
}

/// A state transition triggered by user input or a completed call.
#[derive(Debug, Clone)]
pub enum Action {
    SetQuery(String),
    SetPower(String),
    SetToughness(String),
    SetSubtype(String),
    ToggleColor(Color),
    /// A search completed with at least one card
    ResultsLoaded { cards: Vec<Card>, total: u64 },
    /// A result entry was clicked
    Select(Card),
    /// Token generation completed with the image bytes
    TokenGenerated(Bytes),
    /// Back to the initial state, clearing every field
    Reset,
}

/// The whole client-side session: form fields, results, selection, and the
/// generated image. In-memory only, lives for the window's lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub panel: Panel,
    pub query: String,
    pub power: String,
    pub toughness: String,
    pub subtype: String,
    pub colors: BTreeSet<Color>,
    pub results: Vec<Card>,
    /// Total matches reported by the service; `results` holds at most the
    /// first few of them
    pub total: u64,
    pub selected: Option<Card>,
    pub generated: Option<Bytes>,
}

impl Session {
    /// Apply one action, producing the next session value.
    pub fn apply(mut self, action: Action) -> Session {
        match action {
            Action::SetQuery(value) => self.query = value,
            Action::SetPower(value) => self.power = value,
            Action::SetToughness(value) => self.toughness = value,
            Action::SetSubtype(value) => self.subtype = value,
            Action::ToggleColor(color) => {
                if !self.colors.remove(&color) {
                    self.colors.insert(color);
                }
            }
            Action::ResultsLoaded { cards, total } => {
                self.results = cards;
                self.total = total;
                self.panel = Panel::Results;
            }
            Action::Select(card) => {
                self.selected = Some(card);
                self.panel = Panel::Customize;
            }
            Action::TokenGenerated(bytes) => {
                self.generated = Some(bytes);
                self.panel = Panel::Preview;
            }
            Action::Reset => return Session::default(),
        }
        self
    }

    /// Build the generation payload from the selected card and form fields.
    ///
    /// Fails with a precondition error when no card has been selected; the
    /// caller must not issue a request in that case.
    pub fn token_request(&self) -> TokenResult<TokenRequest> {
        let card = self
            .selected
            .as_ref()
            .ok_or_else(|| TokenError::Precondition("Please select a card first.".to_string()))?;
        Ok(TokenRequest {
            card_name: card.name.clone(),
            power: self.power.trim().to_string(),
            toughness: self.toughness.trim().to_string(),
            subtype: self.subtype.trim().to_string(),
        })
    }

    /// Prepare a download of the generated token.
    pub fn download(&self, unix_ms: i64) -> TokenResult<Download> {
        let bytes = self
            .generated
            .clone()
            .ok_or_else(|| TokenError::Precondition("No token to download.".to_string()))?;
        Ok(Download {
            filename: token_filename(unix_ms),
            bytes,
        })
    }
}

/// A prepared download: the timestamped filename and the image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub bytes: Bytes,
}

/// Timestamped download filename, e.g. `mtg-token-1700000000000.png`.
pub fn token_filename(unix_ms: i64) -> String {
    format!("mtg-token-{}.png", unix_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card {
            name: name.to_string(),
            mana_cost: None,
            type_line: None,
            image_uris: None,
            card_faces: None,
        }
    }

    #[test]
    fn initial_panel_is_search() {
        assert_eq!(Session::default().panel, Panel::Search);
    }

    #[test]
    fn results_loaded_shows_results_panel() {
        let session = Session::default().apply(Action::ResultsLoaded {
            cards: vec![card("a"), card("b")],
            total: 2,
        });
        assert_eq!(session.panel, Panel::Results);
        assert_eq!(session.results.len(), 2);
        assert_eq!(session.total, 2);
    }

    #[test]
    fn select_stores_exactly_that_card() {
        let session = Session::default()
            .apply(Action::ResultsLoaded {
                cards: vec![card("a"), card("b")],
                total: 2,
            })
            .apply(Action::Select(card("b")));
        assert_eq!(session.panel, Panel::Customize);
        assert_eq!(session.selected.as_ref().unwrap().name, "b");
    }

    #[test]
    fn generated_token_shows_preview() {
        let session = Session::default()
            .apply(Action::Select(card("a")))
            .apply(Action::TokenGenerated(Bytes::from_static(b"\x89PNG")));
        assert_eq!(session.panel, Panel::Preview);
        assert!(session.generated.is_some());
    }

    #[test]
    fn token_request_requires_selection() {
        let err = Session::default().token_request().unwrap_err();
        assert!(matches!(err, TokenError::Precondition(_)));
    }

    #[test]
    fn token_request_trims_fields() {
        let session = Session::default()
            .apply(Action::Select(card("Soldier")))
            .apply(Action::SetPower(" 1 ".to_string()))
            .apply(Action::SetToughness("1".to_string()))
            .apply(Action::SetSubtype("  ".to_string()));
        let request = session.token_request().unwrap();
        assert_eq!(request.card_name, "Soldier");
        assert_eq!(request.power, "1");
        assert_eq!(request.toughness, "1");
        assert_eq!(request.subtype, "");
    }

    #[test]
    fn download_requires_generated_bytes() {
        let err = Session::default().download(1_700_000_000_000).unwrap_err();
        assert!(matches!(err, TokenError::Precondition(_)));
    }

    #[test]
    fn download_uses_timestamped_filename() {
        let session =
            Session::default().apply(Action::TokenGenerated(Bytes::from_static(b"png")));
        let download = session.download(1_700_000_000_000).unwrap();
        assert_eq!(download.filename, "mtg-token-1700000000000.png");
        assert_eq!(download.bytes, Bytes::from_static(b"png"));
    }

    #[test]
    fn toggle_color_flips_membership() {
        let session = Session::default().apply(Action::ToggleColor(Color::Red));
        assert!(session.colors.contains(&Color::Red));
        let session = session.apply(Action::ToggleColor(Color::Red));
        assert!(!session.colors.contains(&Color::Red));
    }

    #[test]
    fn reset_clears_everything() {
        let session = Session::default()
            .apply(Action::SetQuery("Soldier".to_string()))
            .apply(Action::ResultsLoaded {
                cards: vec![card("a")],
                total: 7,
            })
            .apply(Action::Select(card("a")))
            .apply(Action::SetPower("3".to_string()))
            .apply(Action::ToggleColor(Color::Green))
            .apply(Action::TokenGenerated(Bytes::from_static(b"png")))
            .apply(Action::Reset);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn reset_is_idempotent() {
        let once = Session::default()
            .apply(Action::Select(card("a")))
            .apply(Action::Reset);
        let twice = once.clone().apply(Action::Reset);
        assert_eq!(once, twice);
        assert_eq!(once, Session::default());
    }

    #[test]
    fn color_labels_and_letters() {
        assert_eq!(Color::all().len(), 5);
        assert_eq!(Color::Blue.letter(), "U");
        assert_eq!(Color::White.label(), "White");
    }
}
