//! Directory-backed store: one JSON file per key.

use super::{KeyValueStore, StorageError};
use crate::config::xdg;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store that keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file which is synced and then renamed
/// over the entry, so a crash mid-write never leaves a truncated value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        xdg::ensure_dir(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let timestamp = Local::now().format("%Y%m%d-%H%M%S%3f");
        let temp_path = self.dir.join(format!("{key}.json.tmp.{timestamp}"));

        fs::write(&temp_path, value).map_err(|source| StorageError::Write {
            path: temp_path.clone(),
            source,
        })?;
        let file = fs::File::open(&temp_path).map_err(|source| StorageError::Write {
            path: temp_path.clone(),
            source,
        })?;
        file.sync_all().map_err(|source| StorageError::Write {
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &path).map_err(|source| StorageError::Persist {
            path: path.clone(),
            temp_path: temp_path.clone(),
            source,
        })?;

        tracing::trace!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
