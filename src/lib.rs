//! postit library
//!
//! A sticky-notes board for the terminal. Notes can be created, dragged by
//! their handle, resized from their corner, edited in place and deleted. The
//! collection is written through to a key-value store on every change and
//! reloaded on the next start.
//!
//! The [`board`] module holds all note state and operations and knows
//! nothing about terminals; [`tui`] maps terminal input onto it and draws it.

pub mod board;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod note;
pub mod storage;
pub mod tui;

pub use board::{Board, EditSession, Interaction};
pub use geometry::{Position, Size, Viewport};
pub use note::{Note, NoteColor, NoteId};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, STORAGE_KEY};
