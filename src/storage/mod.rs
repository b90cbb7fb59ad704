//! Persistence of the note collection in a flat key-value store.
//!
//! The whole collection lives under a single key as a JSON array and is
//! rewritten in full on every change.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::note::Note;
use std::fmt;

/// Key under which the note collection is stored.
pub const STORAGE_KEY: &str = "postit-notes";

/// Synchronous string key-value store.
pub trait KeyValueStore: fmt::Debug {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads the note collection from `store`.
///
/// Returns an empty collection when nothing has been stored yet.
pub fn load_notes(store: &dyn KeyValueStore) -> Result<Vec<Note>, StorageError> {
    match store.get(STORAGE_KEY)? {
        Some(raw) => serialization::from_json(&raw),
        None => Ok(Vec::new()),
    }
}

/// Overwrites the stored collection with `notes`.
pub fn save_notes(store: &mut dyn KeyValueStore, notes: &[Note]) -> Result<(), StorageError> {
    let raw = serialization::to_json(notes)?;
    store.set(STORAGE_KEY, &raw)
}

/// JSON encoding of the persisted layout.
pub mod serialization {
    use super::StorageError;
    use crate::note::Note;

    /// Encodes the collection as a compact JSON array.
    pub fn to_json(notes: &[Note]) -> Result<String, StorageError> {
        serde_json::to_string(notes).map_err(|source| StorageError::Serialize { source })
    }

    /// Decodes a JSON array of notes.
    pub fn from_json(raw: &str) -> Result<Vec<Note>, StorageError> {
        serde_json::from_str(raw).map_err(|source| StorageError::Parse {
            key: super::STORAGE_KEY.to_string(),
            source,
        })
    }
}
