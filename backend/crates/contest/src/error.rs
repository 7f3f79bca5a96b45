//! Contest Error Types
//!
//! This module provides contest-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! An incorrect flag submission is deliberately NOT an error: it is a
//! semantic outcome of a successful call (see `SubmitOutcome`), so the
//! taxonomy here only covers rejected operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contest-specific result type alias
pub type ContestResult<T> = Result<T, ContestError>;

/// Contest-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status
/// codes and can be converted to `AppError` for unified error handling.
/// Every variant is terminal for the single call that produced it and
/// leaves all stored state unchanged.
#[derive(Debug, Error)]
pub enum ContestError {
    /// Referenced case, hint, or participant does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Operation is illegal for the current contest phase
    #[error("Invalid contest state: {0}")]
    InvalidState(&'static str),

    /// Caller's role does not permit the operation
    #[error("Operation requires the {0} role")]
    Unauthorized(&'static str),

    /// Hint exists but has not been released by the chief
    #[error("Hint has not been released yet")]
    HintLocked,

    /// Malformed input (empty title, non-positive points, empty flag, ...)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ContestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContestError::NotFound(_) => StatusCode::NOT_FOUND,
            ContestError::InvalidState(_) => StatusCode::CONFLICT,
            ContestError::Unauthorized(_) => StatusCode::FORBIDDEN,
            ContestError::HintLocked => StatusCode::LOCKED,
            ContestError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContestError::NotFound(_) => ErrorKind::NotFound,
            ContestError::InvalidState(_) => ErrorKind::Conflict,
            ContestError::Unauthorized(_) => ErrorKind::Forbidden,
            ContestError::HintLocked => ErrorKind::Locked,
            ContestError::Validation(_) => ErrorKind::UnprocessableEntity,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContestError::Unauthorized(role) => {
                tracing::warn!(required_role = role, "Rejected: role mismatch");
            }
            ContestError::InvalidState(detail) => {
                tracing::warn!(detail = detail, "Rejected: invalid contest state");
            }
            ContestError::Validation(detail) => {
                tracing::warn!(detail = %detail, "Rejected: validation failure");
            }
            _ => {
                tracing::debug!(error = %self, "Contest error");
            }
        }
    }
}

impl From<ContestError> for AppError {
    fn from(err: ContestError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for ContestError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = axum::Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}
