//! Unified API error handling
//!
//! [`AppError`] is returned by every handler. It renders as
//!
//! ```json
//! { "error": "Employee not found" }
//! ```
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | Conflict | 400 |
//! | Invalid | 400 |
//! | NotFound | 404 |
//! | Database | 500 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Validation failed: {0}")]
    /// Missing or malformed input (400)
    Validation(String),

    #[error("Resource already exists: {0}")]
    /// Uniqueness violation (400, the directory reports duplicates as bad input)
    Conflict(String),

    #[error("Resource not found: {0}")]
    /// Unknown id (404)
    NotFound(String),

    #[error("Invalid request: {0}")]
    /// Body could not be decoded (400)
    Invalid(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Store failure; the message is a client-safe context string (500)
    Database(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Map a repository error, logging store failures under `context`
    pub fn from_repo(err: RepoError, context: &str) -> Self {
        match err {
            RepoError::NotFound(msg) => Self::NotFound(msg),
            RepoError::Duplicate(msg) => Self::Conflict(msg),
            RepoError::Database(msg) => {
                error!(target: "database", error = %msg, "{context}");
                Self::Database(context.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::Invalid(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::NotFound(msg)
            | AppError::Invalid(msg)
            | AppError::Database(msg) => msg,
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Invalid(rejection.body_text())
    }
}

/// Handler result alias
pub type AppResult<T> = Result<T, AppError>;
