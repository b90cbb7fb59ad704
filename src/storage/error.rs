//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the note store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The stored value could not be read.
    #[error("Failed to read store entry: {path}")]
    Read {
        /// File backing the entry.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The value could not be written.
    #[error("Failed to write store entry: {path}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved over the entry.
    #[error("Failed to replace {path} (new contents kept at {temp_path})")]
    Persist {
        /// Entry being replaced.
        path: PathBuf,
        /// Temporary file holding the new contents.
        temp_path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stored value is not a valid note collection.
    #[error("Stored value for '{key}' is not a valid note list")]
    Parse {
        /// Key whose value failed to parse.
        key: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded.
    #[error("Failed to serialize notes")]
    Serialize {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_write_error_includes_path() {
        let err = StorageError::Write {
            path: PathBuf::from("/data/postit/postit-notes.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
        };
        assert!(err.to_string().contains("postit-notes.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_parse_error_names_key() {
        let source = serde_json::from_str::<Vec<u8>>("nope").expect_err("should fail");
        let err = StorageError::Parse {
            key: "postit-notes".to_string(),
            source,
        };
        assert!(err.to_string().contains("'postit-notes'"));
    }
}
