//! Conformance error type shared by every validator
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::JsonKind;
use thiserror::Error;

/// The single validation failure kind.
///
/// One enum, four message templates: a value of the wrong JSON kind, a key
/// the schema does not declare, a declared key that is absent, or a count
/// field that disagrees with the length of its paired list. Constructing a
/// variant is the failure signal; there is no recovery value and the first
/// violation aborts validation of the whole reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConformanceError {
    /// A value's JSON kind differs from the kind the schema declares.
    #[error("{path} should be {expected} not {actual}")]
    TypeMismatch {
        /// JSON path of the offending value, rooted at `$`
        path: String,
        expected: JsonKind,
        actual: JsonKind,
    },

    /// An object carries a key its schema does not declare.
    #[error("unexpected key '{key}' in {key_set}")]
    UnexpectedKey { key_set: String, key: String },

    /// A key the schema declares is absent from the object.
    #[error("missing key '{key}' from {key_set}")]
    MissingKey { key_set: String, key: String },

    /// A declared count field disagrees with the actual list length.
    #[error("expected {declared} entries in {list_field} per {count_field} but found {actual}")]
    CountMismatch {
        count_field: String,
        list_field: String,
        declared: i64,
        actual: i64,
    },
}

impl ConformanceError {
    /// The JSON path or key-set label the error is anchored to.
    pub fn location(&self) -> &str {
        match self {
            Self::TypeMismatch { path, .. } => path,
            Self::UnexpectedKey { key_set, .. } | Self::MissingKey { key_set, .. } => key_set,
            Self::CountMismatch { list_field, .. } => list_field,
        }
    }
}

/// Result type for validation operations
pub type ConformanceResult<T> = Result<T, ConformanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let err = ConformanceError::TypeMismatch {
            path: "$.payload.numReels".to_string(),
            expected: JsonKind::Integer,
            actual: JsonKind::String,
        };
        assert_eq!(
            err.to_string(),
            "$.payload.numReels should be integer not string"
        );
    }

    #[test]
    fn test_key_error_display() {
        let missing = ConformanceError::MissingKey {
            key_set: "reply envelope keys".to_string(),
            key: "apiVersion".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "missing key 'apiVersion' from reply envelope keys"
        );

        let unexpected = ConformanceError::UnexpectedKey {
            key_set: "reels payload keys".to_string(),
            key: "bonus".to_string(),
        };
        assert_eq!(
            unexpected.to_string(),
            "unexpected key 'bonus' in reels payload keys"
        );
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = ConformanceError::CountMismatch {
            count_field: "numReels".to_string(),
            list_field: "reelList".to_string(),
            declared: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "expected 2 entries in reelList per numReels but found 1"
        );
    }

    #[test]
    fn test_location() {
        let err = ConformanceError::TypeMismatch {
            path: "$.payload".to_string(),
            expected: JsonKind::Object,
            actual: JsonKind::Array,
        };
        assert_eq!(err.location(), "$.payload");
    }
}
