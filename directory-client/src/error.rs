//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never completed or its body could not be decoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status and an `{error}` body
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the request could not reach the server at all
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }

    /// Text shown to the user: the server's message, or a generic connectivity hint
    pub fn user_message(&self, base_url: &str) -> String {
        if self.is_connectivity() {
            return format!(
                "Cannot connect to backend at {base_url}. Make sure the server is running."
            );
        }
        match self {
            ClientError::Api { message, .. } => format!("Error: {message}"),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
