//! Employee Repository

use super::{RepoError, RepoResult, is_unique_violation};
use chrono::{SecondsFormat, Utc};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, position, created_at, updated_at";

pub const MSG_DUPLICATE_EMAIL: &str = "Email already exists";
pub const MSG_NOT_FOUND: &str = "Employee not found";

/// Fixed-width UTC timestamp, lexically ordered
fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Escape LIKE wildcards so the search term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// List employees, newest first, optionally filtered by a name substring
pub async fn find_all(pool: &SqlitePool, search: Option<&str>) -> RepoResult<Vec<Employee>> {
    let employees = match search.filter(|s| !s.is_empty()) {
        Some(term) => {
            sqlx::query_as::<_, Employee>(&format!(
                "SELECT {COLUMNS} FROM employees WHERE name LIKE ? ESCAPE '\\' \
                 ORDER BY created_at DESC, id DESC"
            ))
            .bind(format!("%{}%", escape_like(term)))
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Employee>(&format!(
                "SELECT {COLUMNS} FROM employees ORDER BY created_at DESC, id DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee =
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(employee)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert an employee; the UNIQUE constraint on email rejects duplicates
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = timestamp_now();
    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employees (name, email, position, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.position)
    .bind(&now)
    .bind(&now)
    .fetch_one(pool)
    .await;

    let id = match inserted {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => {
            return Err(RepoError::Duplicate(MSG_DUPLICATE_EMAIL.into()));
        }
        Err(e) => return Err(e.into()),
    };

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Employee {id} vanished after insert")))
}

/// Apply only the supplied fields
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    if data.is_empty() {
        return find_by_id(pool, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(MSG_NOT_FOUND.into()));
    }

    let result = sqlx::query(
        "UPDATE employees SET name = COALESCE(?1, name), email = COALESCE(?2, email), \
         position = COALESCE(?3, position), updated_at = ?4 WHERE id = ?5",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.position)
    .bind(timestamp_now())
    .bind(id)
    .execute(pool)
    .await;

    let rows = match result {
        Ok(rows) => rows,
        Err(e) if is_unique_violation(&e) => {
            return Err(RepoError::Duplicate(MSG_DUPLICATE_EMAIL.into()));
        }
        Err(e) => return Err(e.into()),
    };
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(MSG_NOT_FOUND.into()));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(MSG_NOT_FOUND.into()))
}

/// Hard delete; `false` when no row matched
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::open_in_memory().await.unwrap().pool
    }

    fn new_employee(name: &str, email: &str, position: &str) -> EmployeeCreate {
        EmployeeCreate {
            name: name.into(),
            email: email.into(),
            position: position.into(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let pool = test_pool().await;
        let emp = create(&pool, new_employee("John Doe", "john.doe@company.com", "Engineer"))
            .await
            .unwrap();
        assert!(emp.id > 0);
        assert_eq!(emp.created_at, emp.updated_at);
        assert_eq!(emp.name, "John Doe");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = test_pool().await;
        create(&pool, new_employee("John Doe", "john.doe@company.com", "Engineer"))
            .await
            .unwrap();
        let err = create(&pool, new_employee("Johnny", "john.doe@company.com", "Designer"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(ref m) if m == MSG_DUPLICATE_EMAIL));
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_exact_match() {
        let pool = test_pool().await;
        create(&pool, new_employee("John", "john@company.com", "Engineer"))
            .await
            .unwrap();
        create(&pool, new_employee("John", "JOHN@company.com", "Engineer"))
            .await
            .unwrap();
        assert_eq!(count(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_all_newest_first_and_search() {
        let pool = test_pool().await;
        create(&pool, new_employee("John Doe", "john@c.com", "Engineer")).await.unwrap();
        create(&pool, new_employee("Jane Smith", "jane@c.com", "PM")).await.unwrap();
        create(&pool, new_employee("Mary Jane", "mary@c.com", "Designer")).await.unwrap();

        let all = find_all(&pool, None).await.unwrap();
        let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Mary Jane", "Jane Smith", "John Doe"]);

        let janes = find_all(&pool, Some("Jane")).await.unwrap();
        assert_eq!(janes.len(), 2);
        assert!(janes.iter().all(|e| e.name.contains("Jane")));

        assert!(find_all(&pool, Some("Nobody")).await.unwrap().is_empty());
        assert_eq!(find_all(&pool, Some("")).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let pool = test_pool().await;
        create(&pool, new_employee("Ann", "ann@c.com", "Dev")).await.unwrap();
        create(&pool, new_employee("100% Bob", "bob@c.com", "Dev")).await.unwrap();

        assert_eq!(find_all(&pool, Some("%")).await.unwrap().len(), 1);
        assert!(find_all(&pool, Some("_nn")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_merges() {
        let pool = test_pool().await;
        let emp = create(&pool, new_employee("John Doe", "john@c.com", "Engineer"))
            .await
            .unwrap();
        let updated = update(
            &pool,
            emp.id,
            EmployeeUpdate {
                position: Some("Staff Engineer".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "John Doe");
        assert_eq!(updated.email, "john@c.com");
        assert_eq!(updated.position, "Staff Engineer");
        assert_eq!(updated.created_at, emp.created_at);
        assert!(updated.updated_at >= emp.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_and_duplicate() {
        let pool = test_pool().await;
        let a = create(&pool, new_employee("A", "a@c.com", "Dev")).await.unwrap();
        create(&pool, new_employee("B", "b@c.com", "Dev")).await.unwrap();

        let err = update(
            &pool,
            99_999,
            EmployeeUpdate {
                name: Some("X".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        let err = update(&pool, 99_999, EmployeeUpdate::default()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        let err = update(
            &pool,
            a.id,
            EmployeeUpdate {
                email: Some("b@c.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let pool = test_pool().await;
        let emp = create(&pool, new_employee("A", "a@c.com", "Dev")).await.unwrap();

        assert!(!delete(&pool, 99_999).await.unwrap());
        assert!(delete(&pool, emp.id).await.unwrap());
        assert!(find_by_id(&pool, emp.id).await.unwrap().is_none());
        assert!(!delete(&pool, emp.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let pool = test_pool().await;
        let first = create(&pool, new_employee("A", "a@c.com", "Dev")).await.unwrap();
        delete(&pool, first.id).await.unwrap();
        let second = create(&pool, new_employee("B", "b@c.com", "Dev")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Jane"), "Jane");
    }
}
