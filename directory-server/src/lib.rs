//! Employee Directory Server
//!
//! REST API over a single SQLite table of employees.
//!
//! ```text
//! directory-server/src/
//! ├── core/        # config, state, lifecycle errors, server
//! ├── db/          # SQLite pool, migrations, repositories
//! ├── api/         # HTTP routes and handlers
//! ├── middleware/  # request logging
//! ├── routes.rs    # router assembly + tower-http layers
//! └── utils/       # API errors, validation, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// Load `.env` and initialize logging; keep the returned guard alive for file logging
pub fn setup_environment(
    config: &Config,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())
}

pub fn print_banner() {
    println!(
        r#"
  ___            _                     ___  _
 | __|_ __  _ __| |___ _  _ ___ ___   |   \(_)_ _ ___ __| |_ ___ _ _ _  _
 | _|| '  \| '_ \ / _ \ || / -_) -_)  | |) | | '_/ -_) _|  _/ _ \ '_| || |
 |___|_|_|_| .__/_\___/\_, \___\___|  |___/|_|_| \___\__|\__\___/_|  \_, |
           |_|         |__/                                          |__/
    "#
    );
}
