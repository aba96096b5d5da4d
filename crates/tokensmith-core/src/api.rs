//! HTTP client for the two token service endpoints.
//!
//! The service owns all the hard parts (card lookup, image compositing);
//! this client only builds the requests, brackets them with logging, and
//! maps the response shapes onto [`TokenError`].

use bytes::Bytes;
use serde::Serialize;

use crate::card::SearchResponse;
use crate::error::{TokenError, TokenResult};

/// Default service address, matching the local development server.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the token service, stored without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

/// Payload for `POST /api/token/generate`.
///
/// Carries the card name plus the three text overrides, all trimmed. Empty
/// overrides are allowed; the service decides how to compose them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    pub card_name: String,
    pub power: String,
    pub toughness: String,
    pub subtype: String,
}

/// Validate a search query: must be non-empty after trimming.
///
/// Runs before any network traffic, so a blank search never leaves the
/// client.
pub fn validate_query(query: &str) -> TokenResult<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(TokenError::Validation(
            "Please enter a card name to search for.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Extract the structured message from a non-success response body,
/// falling back when the body is not the expected `{"error": "..."}` shape.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

/// Client for the token service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Search for cards by name.
    ///
    /// An empty result set is reported as [`TokenError::NotFound`] so the
    /// caller has a single error surface for "nothing to show".
    pub async fn search(&self, query: &str) -> TokenResult<SearchResponse> {
        let query = validate_query(query)?;
        let url = format!("{}/api/search", self.config.base_url);
        tracing::info!("Searching cards: {:?}", query);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str())])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let msg = error_message(&body, "Failed to search for cards. Please try again.");
            tracing::error!("Search failed ({}): {}", status, msg);
            return Err(TokenError::Server(msg));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        if parsed.cards.is_empty() {
            return Err(TokenError::NotFound(
                "No cards found. Try a different search term.".to_string(),
            ));
        }

        tracing::info!(
            "Search returned {} of {} matching cards",
            parsed.cards.len(),
            parsed.total
        );
        Ok(parsed)
    }

    /// Generate a token image, returning the raw PNG bytes.
    pub async fn generate(&self, request: &TokenRequest) -> TokenResult<Bytes> {
        let url = format!("{}/api/token/generate", self.config.base_url);
        tracing::info!("Generating token for {:?}", request.card_name);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            let msg = error_message(&body, "Failed to generate token. Please try again.");
            tracing::error!("Generation failed ({}): {}", status, msg);
            return Err(TokenError::Server(msg));
        }

        let bytes = response.bytes().await?;
        tracing::info!("Received token image ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_query_trims() {
        assert_eq!(validate_query("  Soldier  ").unwrap(), "Soldier");
    }

    #[test]
    fn validate_query_rejects_empty() {
        for query in ["", "   ", "\t", "\n  \r\n"] {
            let err = validate_query(query).unwrap_err();
            assert!(matches!(err, TokenError::Validation(_)), "{:?}", query);
        }
    }

    #[test]
    fn error_message_reads_structured_body() {
        let msg = error_message(r#"{"error": "Card not found"}"#, "fallback");
        assert_eq!(msg, "Card not found");
    }

    #[test]
    fn error_message_falls_back_on_garbage() {
        assert_eq!(error_message("<html>502</html>", "fallback"), "fallback");
        assert_eq!(error_message(r#"{"detail": "nope"}"#, "fallback"), "fallback");
    }

    #[test]
    fn config_strips_trailing_slashes() {
        let config = ApiConfig::new("http://localhost:5000///");
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn config_default_is_local_server() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE);
    }

    #[tokio::test]
    async fn search_rejects_blank_query_before_any_request() {
        // Port 9 (discard) would refuse the connection; a Validation error
        // proves the call never got that far.
        let api = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"));
        let err = api.search("   ").await.unwrap_err();
        assert!(matches!(err, TokenError::Validation(_)));
    }

    #[test]
    fn token_request_serializes_expected_fields() {
        let request = TokenRequest {
            card_name: "Soldier of the Pantheon".to_string(),
            power: "1".to_string(),
            toughness: "1".to_string(),
            subtype: "Soldier".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "card_name": "Soldier of the Pantheon",
                "power": "1",
                "toughness": "1",
                "subtype": "Soldier"
            })
        );
    }
}
