//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the `{status, message}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error(transparent)]
    Store(#[from] mongodb::error::Error),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Error response body, matching the API envelope shape
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    message: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope `status` discriminator: client-correctable failures are
    /// `fail`, unexpected backend failures are `error`.
    fn envelope_status(&self) -> &'static str {
        match self {
            AppError::Store(_) | AppError::Internal(_) => "error",
            _ => "fail",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(ref e) = self {
            tracing::error!("store error: {e}");
        }
        if let AppError::Internal(ref msg) = self {
            tracing::error!("internal error: {msg}");
        }

        let body = ErrorEnvelope {
            status: self.envelope_status(),
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(entity.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("User".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("Mobile").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn backend_failures_are_errors_everything_else_fails() {
        assert_eq!(AppError::internal("boom").envelope_status(), "error");
        assert_eq!(AppError::InvalidCredentials.envelope_status(), "fail");
        assert_eq!(AppError::conflict("Mobile").envelope_status(), "fail");
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(
            AppError::NotFound("User".into()).to_string(),
            "User not found"
        );
    }
}
