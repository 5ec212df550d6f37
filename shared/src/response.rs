//! API response bodies

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint
///
/// ```json
/// { "error": "Employee not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness probe body (`GET /health`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK" when the process answers
    pub status: String,
    /// RFC 3339 server time
    pub timestamp: String,
    pub message: String,
}

/// Endpoint index body (`GET /test`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointIndex {
    pub message: String,
    pub endpoints: Vec<String>,
}
