//! TOML configuration schema types for postit.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial (or empty) file is valid.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`) parsed by the
//! `humantime` crate.

use crate::config::xdg;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Fallback tick rate when `tui.tick_rate` cannot be parsed.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Root configuration encompassing all sections.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Note storage and board geometry.
    pub board: BoardConfig,
    /// Terminal front end settings.
    pub tui: TuiConfig,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// `[board]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding the note store. Empty means the XDG data directory.
    pub store_dir: String,
    /// Board units per terminal column.
    pub cell_width: u16,
    /// Board units per terminal row.
    pub cell_height: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            store_dir: String::new(),
            cell_width: 10,
            cell_height: 20,
        }
    }
}

impl BoardConfig {
    /// Resolved store directory, with `~` expanded.
    pub fn store_dir_path(&self) -> PathBuf {
        if self.store_dir.is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(&self.store_dir)
        }
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// `[tui]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parsed tick rate, falling back to [`DEFAULT_TICK_RATE`] on bad input.
    pub fn tick_rate_duration(&self) -> Duration {
        match humantime::parse_duration(&self.tick_rate) {
            Ok(d) if !d.is_zero() => d,
            Ok(_) => {
                tracing::warn!("tui.tick_rate must be positive, using default");
                DEFAULT_TICK_RATE
            }
            Err(e) => {
                tracing::warn!("invalid tui.tick_rate {:?}: {}", self.tick_rate, e);
                DEFAULT_TICK_RATE
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default verbosity when `POSTIT_LOG` is unset.
    pub level: LogLevel,
    /// Log file path. Empty means `postit.log` in the data directory.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

impl LogConfig {
    /// Resolved log file path, with `~` expanded.
    pub fn file_path(&self) -> PathBuf {
        if self.file.is_empty() {
            xdg::data_dir().join("postit.log")
        } else {
            xdg::expand_tilde(&self.file)
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
