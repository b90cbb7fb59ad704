//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `POSTIT_LOG` environment variable, falling back to the configured level.
//! The board owns the terminal, so output is appended to a log file instead
//! of stderr.
//!
//! ```bash
//! # Debug level
//! POSTIT_LOG=debug postit
//!
//! # Module-specific filtering
//! POSTIT_LOG=postit::board=trace,warn postit
//! ```

use crate::config::schema::{LogConfig, LogLevel};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "POSTIT_LOG";

/// Builds the filter from `POSTIT_LOG`, or from `level` when unset or invalid.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the tracing subscriber writing to the configured log file.
///
/// Returns the log file path. Fails if the file cannot be opened; a
/// subscriber installed earlier is left in place.
pub fn init(config: &LogConfig) -> std::io::Result<PathBuf> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    if let Err(e) = fmt()
        .with_env_filter(build_filter(config.level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
    {
        tracing::debug!("keeping existing tracing subscriber: {}", e);
    }
    Ok(path)
}
