//! Logging configuration using tracing

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "crodash.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/cro-dashboard/logs/`
/// Log level is controlled by `CRODASH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CRODASH_LOG=debug crodash
/// CRODASH_LOG=crodash_app=trace crodash
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via CRODASH_LOG
    let env_filter = EnvFilter::try_from_env("CRODASH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("crodash=info,warn"));

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

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("CRO Dashboard starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("cro-dashboard").join("logs"))
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the file with the UTC date.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(log_file_name(Utc::now().date_naive())))
}

fn log_file_name(day: NaiveDate) -> String {
    format!("{}.{}", LOG_FILE_NAME, day.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_has_daily_suffix() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(day), "crodash.log.2024-03-09");
    }

    #[test]
    fn test_current_log_file_in_log_directory() {
        let file = get_current_log_file().unwrap();
        assert_eq!(file.parent(), Some(get_log_directory().unwrap().as_path()));
        let name = file.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("crodash.log.20"), "{}", name);
    }
}
