use std::time::Instant;

use crate::core::{Config, Result};
use crate::db::DbService;

/// Server state shared by every handler
///
/// Cheap to clone: the pool is reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | Employee store |
/// | started_at | Process start, for uptime |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state around an already opened store
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// Open the database file named in `config`, seeding it when configured
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::open(&config.database_path).await?;

        if config.seed_sample_data {
            match db.seed_sample_data().await {
                Ok(0) => {}
                Ok(n) => tracing::info!(count = n, "Seeded sample employees"),
                Err(e) => tracing::warn!(error = %e, "Failed to seed sample employees"),
            }
        }

        Ok(Self::new(config.clone(), db))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
