/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Precondition failures detected inline by a handler, each carrying the
 * status code the client should see:
 * - Missing or invalid request fields (400)
 * - Missing or invalid credentials, or acting on someone else's record (401)
 * - Referenced record does not exist (404)
 * - Username or email already taken (409)
 *
 * ## Infrastructure Errors
 *
 * Failures of a collaborator (database, image store, token signing, password
 * hashing). These always surface as 500, except for an unconfigured image
 * store, which is 503.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::media::ImageStoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use social_net::backend::error::BackendError;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Precondition failure with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Image upload or removal failed
    #[error(transparent)]
    ImageStore(#[from] ImageStoreError),

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password could not be hashed or verified
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Request payload failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ImageStore` - 503 when uploads are disabled, otherwise 500
    /// - `SharedError` - 400
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ImageStore(ImageStoreError::Disabled) => StatusCode::SERVICE_UNAVAILABLE,
            Self::ImageStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Token(_) | Self::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.detail().to_string(),
            other => other.to_string(),
        }
    }
}

/// Attach the operation name to a handler error and log it
///
/// Server-side failures are logged at `error`, client mistakes at `warn`.
pub trait LogError<T> {
    fn log_err(self, operation: &str) -> Result<T, BackendError>;
}

impl<T, E> LogError<T> for Result<T, E>
where
    E: Into<BackendError>,
{
    fn log_err(self, operation: &str) -> Result<T, BackendError> {
        self.map_err(|e| {
            let err = e.into();
            if err.status_code().is_server_error() {
                tracing::error!("error in {}: {}", operation, err);
            } else {
                tracing::warn!("{} rejected: {}", operation, err.message());
            }
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::unauthorized("no").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            BackendError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::from(ImageStoreError::Disabled).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_from_shared_error() {
        let backend_error: BackendError = SharedError::validation("text", "Text field is required").into();
        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(backend_error.message(), "Text field is required");
    }

    #[test]
    fn test_log_err_preserves_error() {
        let result: Result<(), BackendError> = Err(BackendError::bad_request("bad"));
        let err = result.log_err("test").unwrap_err();
        assert_eq!(err.message(), "bad");
    }
}
