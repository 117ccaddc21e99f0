//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "FILTERPANE_LOG";

const LOG_FILE_NAME: &str = "filterpane.log";

/// Filter used when `FILTERPANE_LOG` is unset or invalid.
///
/// `EnvFilter` matches targets by prefix, so `filterpane` covers the binary
/// and every `filterpane_*` crate. Per-edit commits log at `debug`/`trace`
/// and stay hidden; third-party crates only report warnings.
const DEFAULT_FILTER: &str = "filterpane=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/filterpane/logs/` because the
/// terminal itself is owned by the TUI.
/// Log level is controlled by `FILTERPANE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FILTERPANE_LOG=debug cargo run
/// FILTERPANE_LOG=filterpane_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("filterpane starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("filterpane").join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert!(filter.to_string().contains("filterpane=info"));
    }

    #[test]
    fn test_log_file_lives_under_app_dir() {
        let path = get_current_log_file();
        assert!(path.ends_with("filterpane/logs/filterpane.log"));
    }
}
