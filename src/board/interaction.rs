//! Pointer interaction state: at most one note is dragged or resized at a time.

use crate::geometry::{Position, Size};
use crate::note::NoteId;

/// What the pointer is currently doing to the board.
///
/// A single slot: starting a drag or resize replaces whatever was active, and
/// a simultaneous drag and resize cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No button held over a note.
    #[default]
    Idle,
    /// Moving a note by its handle.
    Dragging {
        /// Note being moved.
        id: NoteId,
        /// Note position when the drag began.
        start_position: Position,
        /// Pointer position when the drag began.
        start_pointer: Position,
    },
    /// Resizing a note from its bottom-right corner.
    Resizing {
        /// Note being resized.
        id: NoteId,
        /// Note size when the resize began.
        start_size: Size,
        /// Pointer position when the resize began.
        start_pointer: Position,
    },
}

impl Interaction {
    /// Returns `true` while a drag or resize is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Interaction::Idle)
    }

    /// The note under interaction, if any.
    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging { id, .. } | Interaction::Resizing { id, .. } => Some(*id),
        }
    }
}
