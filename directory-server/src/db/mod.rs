//! Database Module
//!
//! Handles the SQLite connection pool, migrations and sample data.

pub mod repository;

use repository::{RepoResult, employee};
use shared::EmployeeCreate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

use crate::core::ServerError;

/// Rows inserted into an empty directory on first start
const SAMPLE_EMPLOYEES: [(&str, &str, &str); 3] = [
    ("John Doe", "john.doe@company.com", "Software Engineer"),
    ("Jane Smith", "jane.smith@company.com", "Product Manager"),
    ("Mike Johnson", "mike.johnson@company.com", "Designer"),
];

/// Database service, owns the SQLite connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file with WAL mode and apply migrations
    pub async fn open(db_path: &str) -> Result<Self, ServerError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| ServerError::Database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SQLite WAL, busy_timeout=5000ms)");

        Self::migrate(pool).await
    }

    /// Private in-memory database; a single pinned connection keeps it alive
    pub async fn open_in_memory() -> Result<Self, ServerError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| ServerError::Database(format!("Invalid database path: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, ServerError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to apply migrations: {e}")))?;
        tracing::debug!("Database migrations applied");
        Ok(Self { pool })
    }

    /// Insert the sample employees when the table is empty; returns how many were added
    pub async fn seed_sample_data(&self) -> RepoResult<usize> {
        if employee::count(&self.pool).await? > 0 {
            return Ok(0);
        }

        tracing::info!("Adding sample employees...");
        for (name, email, position) in SAMPLE_EMPLOYEES {
            employee::create(
                &self.pool,
                EmployeeCreate {
                    name: name.into(),
                    email: email.into(),
                    position: position.into(),
                },
            )
            .await?;
        }
        tracing::info!(count = SAMPLE_EMPLOYEES.len(), "Sample employees added");
        Ok(SAMPLE_EMPLOYEES.len())
    }

    /// Round-trip probe used by the detailed health check
    pub async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection; pending queries finish first
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}
