//! Draft text of the note currently in edit mode.

use crate::note::NoteId;

/// The single open edit: which note, and the uncommitted text.
///
/// The cursor is always at the end of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: NoteId,
    draft: String,
}

impl EditSession {
    /// Opens an edit on `id` starting from `content`.
    pub fn new(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            draft: content.into(),
        }
    }

    /// Note being edited.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Uncommitted text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Appends a character.
    pub fn insert(&mut self, c: char) {
        self.draft.push(c);
    }

    /// Appends a line break.
    pub fn newline(&mut self) {
        self.draft.push('\n');
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Consumes the session, returning the note id and final text.
    pub fn into_parts(self) -> (NoteId, String) {
        (self.id, self.draft)
    }
}
