//! Input validation helpers
//!
//! Messages and the checks run before any write.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use shared::{EmployeeCreate, EmployeeUpdate};

use crate::utils::AppError;

// ── Messages ────────────────────────────────────────────────────────

pub const MSG_REQUIRED: &str = "Name, email, and position are required";
pub const MSG_EMPTY_UPDATE_FIELD: &str = "Name, email, and position must not be empty";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";

/// `local@domain.tld`, no whitespace, exactly one `@`
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Raw create body; any field may be missing, null or of the wrong JSON type.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub position: Option<Value>,
}

/// Only non-blank strings count as present
fn trimmed(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(v)) => Some(v.trim().to_string()).filter(|v| !v.is_empty()),
        _ => None,
    }
}

/// Validate a create request: presence first, then email format.
pub fn validate_create(req: CreateEmployeeRequest) -> Result<EmployeeCreate, AppError> {
    let (Some(name), Some(email), Some(position)) =
        (trimmed(req.name), trimmed(req.email), trimmed(req.position))
    else {
        return Err(AppError::validation(MSG_REQUIRED));
    };

    if !is_valid_email(&email) {
        return Err(AppError::validation(MSG_INVALID_EMAIL));
    }

    Ok(EmployeeCreate {
        name,
        email,
        position,
    })
}

/// Validate a partial update: supplied fields must be non-empty, a supplied email well-formed.
pub fn validate_update(update: EmployeeUpdate) -> Result<EmployeeUpdate, AppError> {
    let supplied_blank = [&update.name, &update.email, &update.position]
        .into_iter()
        .flatten()
        .any(|v| v.trim().is_empty());
    if supplied_blank {
        return Err(AppError::validation(MSG_EMPTY_UPDATE_FIELD));
    }

    let update = EmployeeUpdate {
        name: update.name.map(|v| v.trim().to_string()),
        email: update.email.map(|v| v.trim().to_string()),
        position: update.position.map(|v| v.trim().to_string()),
    };

    if let Some(email) = &update.email {
        if !is_valid_email(email) {
            return Err(AppError::validation(MSG_INVALID_EMAIL));
        }
    }

    Ok(update)
}
