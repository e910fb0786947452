//! Shared Error Types
//!
//! Errors raised while validating request payloads before any storage is
//! touched. The backend maps every variant to `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use socialmedia::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "Post content is required");
//! assert_eq!(error.to_string(), "Post content is required");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// One field failed validation
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Message returned to the client
        message: String,
    },

    /// Several required fields were missing at once
    #[error("Please enter all fields")]
    MissingFields {
        /// Names of the missing fields, in request order
        fields: Vec<String>,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing-fields error
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Return the trimmed-non-empty value of an optional text field.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("content", "Comment content is required");
        match &error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "content");
                assert_eq!(message, "Comment content is required");
            }
            _ => panic!("Expected ValidationError"),
        }
        assert_eq!(error.to_string(), "Comment content is required");
    }

    #[test]
    fn test_missing_fields_display() {
        let error = SharedError::missing(["email", "password"]);
        assert_eq!(error.to_string(), "Please enter all fields");
        assert_eq!(
            error,
            SharedError::MissingFields {
                fields: vec!["email".to_string(), "password".to_string()]
            }
        );
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("hello")), Some("hello"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }
}
