//! Error type for helpers that reject inputs of the wrong JSON kind.

use serde_json::Value;
use thiserror::Error;

use crate::record::kind_name;

/// Unified error type for the utility helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilityError {
    /// An array was required
    #[error("Expected an array, found {found}")]
    NotACollection { found: &'static str },

    /// A string was required
    #[error("Expected a string, found {found}")]
    NotAString { found: &'static str },
}

impl UtilityError {
    /// Create a not-a-collection error describing the rejected value.
    pub fn not_a_collection(value: &Value) -> Self {
        Self::NotACollection {
            found: kind_name(value),
        }
    }

    /// Create a not-a-string error describing the rejected value.
    pub fn not_a_string(value: &Value) -> Self {
        Self::NotAString {
            found: kind_name(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_a_collection_error() {
        let err = UtilityError::not_a_collection(&json!("hello world"));
        assert!(matches!(err, UtilityError::NotACollection { found: "string" }));
        assert_eq!(err.to_string(), "Expected an array, found string");
    }

    #[test]
    fn test_not_a_string_error() {
        let err = UtilityError::not_a_string(&json!({"name": "Aid"}));
        assert!(matches!(err, UtilityError::NotAString { found: "object" }));
        assert_eq!(err.to_string(), "Expected a string, found object");
    }
}
