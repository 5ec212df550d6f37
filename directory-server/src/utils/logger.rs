//! Logging Infrastructure
//!
//! Structured logging setup for development (stdout) and production (daily rolling files).

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a level is supplied
const DEFAULT_FILTER: &str = "directory_server=info,tower_http=info";

/// Build the filter: `RUST_LOG` wins, then `log_level`, then the default.
fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match log_level {
        Some(level) => EnvFilter::new(format!("directory_server={level},tower_http={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Initialize the logger with optional file output
///
/// Returns the appender guard when logging to a file; it must outlive the process' logging.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    log_dir: Option<&str>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "directory-server");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            // try_init: tests and embedders may already have a global subscriber
            let _ = subscriber.with_ansi(false).with_writer(writer).try_init();
            return Some(guard);
        }
        eprintln!("LOG_DIR {dir} is not a directory, logging to stdout");
    }

    let _ = subscriber.try_init();
    None
}
