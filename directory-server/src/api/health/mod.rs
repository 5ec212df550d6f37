//! Health check routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /health | GET | Liveness probe, no store access |
//! | /health/detailed | GET | Uptime and database probe |
//! | /test | GET | Endpoint index |
//!
//! ```json
//! {
//!   "status": "OK",
//!   "timestamp": "2026-10-19T09:30:00.000Z",
//!   "message": "Employee API is running"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use shared::{EndpointIndex, HealthResponse};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
        .route("/test", get(endpoint_index))
}

/// Detailed health body
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    /// OK | DEGRADED
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    database: CheckResult,
}

/// Single check result
#[derive(Serialize)]
pub struct CheckResult {
    /// ok | error
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        message: "Employee API is running".to_string(),
    })
}

/// Health check including a database round trip
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let db_start = std::time::Instant::now();
    let db_check = match state.db.ping().await {
        Ok(()) => CheckResult::ok_with_latency(db_start.elapsed().as_millis() as u64),
        Err(e) => CheckResult::error(e.to_string()),
    };

    let all_ok = db_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "OK" } else { "DEGRADED" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        checks: HealthChecks { database: db_check },
    })
}

/// Lists the public endpoints
pub async fn endpoint_index() -> Json<EndpointIndex> {
    let endpoints = [
        "GET /health",
        "GET /health/detailed",
        "GET /api/employees",
        "GET /api/employees/:id",
        "POST /api/employees",
        "PUT /api/employees/:id",
        "DELETE /api/employees/:id",
    ];
    Json(EndpointIndex {
        message: "Backend is working!".to_string(),
        endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
    })
}
