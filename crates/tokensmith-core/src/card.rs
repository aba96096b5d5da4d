//! Card wire models for the search endpoint.
//!
//! Card records carry many more fields on the wire than the studio needs;
//! unknown fields are ignored on deserialization.

use serde::Deserialize;

/// Image references for a card printing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ImageUris {
    /// Small thumbnail, the size used in result entries
    pub small: Option<String>,
}

/// One face of a multi-faced card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct CardFace {
    pub image_uris: Option<ImageUris>,
}

/// A card record returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub image_uris: Option<ImageUris>,
    /// Present on double-faced cards, which carry their images per face
    pub card_faces: Option<Vec<CardFace>>,
}

impl Card {
    /// Best available thumbnail: the primary image if present, else the
    /// first face's image, else none. A card without any image is still
    /// selectable.
    pub fn thumbnail(&self) -> Option<&str> {
        if let Some(uri) = self.image_uris.as_ref().and_then(|u| u.small.as_deref()) {
            return Some(uri);
        }
        self.card_faces
            .as_ref()
            .and_then(|faces| faces.first())
            .and_then(|face| face.image_uris.as_ref())
            .and_then(|u| u.small.as_deref())
    }

    /// "mana cost • type line" summary shown under the card name.
    /// Either part may be absent.
    pub fn summary_line(&self) -> String {
        match (self.mana_cost.as_deref(), self.type_line.as_deref()) {
            (Some(cost), Some(types)) if !cost.is_empty() => format!("{} • {}", cost, types),
            (_, Some(types)) => types.to_string(),
            (Some(cost), None) => cost.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Response shape of `GET /api/search`.
///
/// The service returns at most a handful of matches plus the total number of
/// cards that matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub total: u64,
}
