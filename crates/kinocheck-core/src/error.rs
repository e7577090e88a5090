//! Error types for the kinocheck core
//!
//! Conformance failures and transport failures are different animals: the
//! first means the API broke its contract, the second means we never got
//! a reply worth judging. The core error keeps them as separate variants
//! so the caller can tell them apart without string matching.

use kinocheck_schemas::ConformanceError;
use thiserror::Error;

/// Main error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// A reply was fetched and decoded but does not conform to its schema
    #[error(transparent)]
    Validation(#[from] ConformanceError),

    /// The HTTP request failed or returned a non-success status
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The reply body could not be decoded as JSON
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using the core Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a conformance failure rather than a
    /// transport or decode failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinocheck_schemas::JsonKind;

    #[test]
    fn test_validation_error_is_transparent() {
        let err = Error::from(ConformanceError::TypeMismatch {
            path: "$.payload".to_string(),
            expected: JsonKind::Object,
            actual: JsonKind::Array,
        });
        assert_eq!(err.to_string(), "$.payload should be object not array");
        assert!(err.is_validation());
    }

    #[test]
    fn test_http_error_display() {
        let err = Error::Http {
            message: "GET http://localhost:8000/reels/ returned 404 Not Found".to_string(),
            status_code: Some(404),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "HTTP error: GET http://localhost:8000/reels/ returned 404 Not Found"
        );
        assert!(!err.is_validation());
    }
}
