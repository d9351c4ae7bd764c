//! Shared Error Types
//!
//! This module defines error types that are shared between the client and the
//! server. They describe problems with request payloads that can be detected
//! without touching the database.
//!
//! # Error Categories
//!
//! - `ValidationError` - Request payload validation failures
//!
//! # Usage
//!
//! ```rust
//! use social_net::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Text field is required");
//! assert_eq!(error.detail(), "Text field is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur on both sides of the API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Request validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
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

    /// The message without the category prefix, suitable for API clients
    pub fn detail(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("text", "Text field is required");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "text");
                assert_eq!(message, "Text field is required");
            }
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("img", "bad image");
        let display = format!("{}", error);
        assert!(display.contains("'img'"));
        assert!(display.contains("bad image"));
    }

    #[test]
    fn test_detail_strips_prefix() {
        let error = SharedError::validation("text", "Post must have text or image");
        assert_eq!(error.detail(), "Post must have text or image");
    }
}
