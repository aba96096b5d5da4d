//! Tokensmith Core Library
//!
//! Client-side domain for the MTG token creator: wire models for the card
//! search endpoint, an HTTP client for the two service calls, and the
//! session state machine that drives which panel of the studio is visible.
//!
//! ## Overview
//!
//! The token service exposes two endpoints. `GET /api/search` looks cards up
//! by name; `POST /api/token/generate` composites a token image from a card
//! plus user-supplied overrides and returns raw PNG bytes. Everything else
//! (search ranking, image compositing) is server-side and opaque here.
//!
//! The whole client session is one [`Session`] value. User interactions and
//! completed calls become [`Action`]s; applying an action yields the next
//! session. The visible panel is derived from [`Panel`], so at most one of
//! the results/customize/preview sections can ever be shown.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tokensmith_core::{Action, ApiClient, ApiConfig, Session};
//!
//! #[tokio::main]
//! async fn main() -> tokensmith_core::TokenResult<()> {
//!     let api = ApiClient::new(ApiConfig::default());
//!     let mut session = Session::default();
//!
//!     let found = api.search("Soldier").await?;
//!     session = session.apply(Action::ResultsLoaded {
//!         cards: found.cards,
//!         total: found.total,
//!     });
//!
//!     let card = session.results[0].clone();
//!     session = session.apply(Action::Select(card));
//!
//!     let png = api.generate(&session.token_request()?).await?;
//!     session = session.apply(Action::TokenGenerated(png));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod card;
pub mod error;
pub mod notice;
pub mod session;

// Re-exports
pub use api::{validate_query, ApiClient, ApiConfig, TokenRequest, DEFAULT_API_BASE};
pub use bytes::Bytes;
pub use card::{Card, CardFace, ImageUris, SearchResponse};
pub use error::{TokenError, TokenResult};
pub use notice::{Notice, NoticeLevel, NOTICE_TTL};
pub use session::{token_filename, Action, Color, Download, Panel, Session};
