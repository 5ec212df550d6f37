//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub position: String,
}

/// Update employee payload
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl EmployeeUpdate {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.position.is_none()
    }

    /// Build an update holding only the fields that differ from `current`
    pub fn diff(current: &Employee, name: &str, email: &str, position: &str) -> Self {
        let changed = |old: &str, new: &str| (old != new).then(|| new.to_string());
        Self {
            name: changed(&current.name, name),
            email: changed(&current.email, email),
            position: changed(&current.position, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        let now = Utc::now();
        Employee {
            id: 7,
            name: "Jane Smith".into(),
            email: "jane.smith@company.com".into(),
            position: "Product Manager".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_employee_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = EmployeeUpdate {
            position: Some("Director".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"position":"Director"}"#);
    }

    #[test]
    fn test_update_diff_keeps_only_changes() {
        let emp = sample();
        let update = EmployeeUpdate::diff(&emp, "Jane Smith", "jane.smith@company.com", "CTO");
        assert_eq!(update.name, None);
        assert_eq!(update.email, None);
        assert_eq!(update.position.as_deref(), Some("CTO"));

        let unchanged = EmployeeUpdate::diff(&emp, &emp.name, &emp.email, &emp.position);
        assert!(unchanged.is_empty());
    }
}
