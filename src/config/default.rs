//! Default configuration template and file creation.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and writes it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# postit configuration
#
# This file was generated with the built-in defaults.
# Location: $XDG_CONFIG_HOME/postit/config.toml

# ==============================================================================
# Board
# ==============================================================================

[board]

# Directory holding the note store (postit-notes.json).
# Empty means $XDG_DATA_HOME/postit (usually ~/.local/share/postit).
# Tilde (~) is expanded to the home directory.
store_dir = ""

# Board units covered by one terminal column and one terminal row.
# A new note is 200x200 units, so with the defaults it spans
# 20 columns and 10 rows. Notes may be resized between 200x150 and 400x400.
cell_width = 10
cell_height = 20

# ==============================================================================
# Terminal UI
# ==============================================================================

[tui]

# Housekeeping tick as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Verbosity when POSTIT_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Log file. The terminal belongs to the board, so logs always go to a file.
# Empty means $XDG_DATA_HOME/postit/postit.log
file = ""
"#;

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    write_config_template(&path, force)?;
    Ok(path)
}

/// Writes the template to `path` with 0600 permissions, honoring `force`.
fn write_config_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    Ok(())
}
