//! Error types for Tokensmith

use thiserror::Error;

/// Main error type for Tokensmith client operations
///
/// Every variant is surfaced to the user as a transient notice; none end the
/// session. The user can always retry or reset.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Required input was empty, caught before any network call
    #[error("{0}")]
    Validation(String),

    /// Action invoked without its required prior state
    #[error("{0}")]
    Precondition(String),

    /// Request could not complete
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Well-formed response but no usable results
    #[error("{0}")]
    NotFound(String),

    /// Non-success response with a structured message
    #[error("{0}")]
    Server(String),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using TokenError
pub type TokenResult<T> = Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenError::NotFound("No cards found. Try a different search term.".to_string());
        assert_eq!(
            format!("{}", err),
            "No cards found. Try a different search term."
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let token_err: TokenError = io_err.into();
        assert!(matches!(token_err, TokenError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let token_err: TokenError = json_err.into();
        assert!(matches!(token_err, TokenError::Decode(_)));
    }
}
