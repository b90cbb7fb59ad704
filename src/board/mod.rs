//! The note board: the collection of notes, the edit-mode slot, and the
//! pointer interaction slot.
//!
//! Every mutation of the collection is written through to the key-value
//! store. Load and save failures are logged and otherwise ignored; the
//! in-memory collection stays authoritative for the session.

mod edit;
mod interaction;

pub use edit::EditSession;
pub use interaction::Interaction;

use crate::geometry::{Position, Viewport, DEFAULT_NOTE_SIZE};
use crate::note::{Note, NoteColor, NoteId};
use crate::storage::{self, KeyValueStore};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum distance of a new note from the top and left edges.
pub const NEW_NOTE_MARGIN: i32 = 20;

/// Sticky-notes board state.
#[derive(Debug)]
pub struct Board {
    notes: Vec<Note>,
    viewport: Viewport,
    interaction: Interaction,
    editing: Option<EditSession>,
    store: Box<dyn KeyValueStore>,
    rng: StdRng,
}

impl Board {
    /// Loads the board from `store`.
    ///
    /// A missing or unreadable collection yields an empty board; the failure
    /// is logged.
    pub fn load(store: Box<dyn KeyValueStore>, viewport: Viewport) -> Self {
        Self::with_rng(store, viewport, StdRng::from_entropy())
    }

    /// Loads the board from `store` using `rng` for placement and colors.
    pub fn with_rng(store: Box<dyn KeyValueStore>, viewport: Viewport, rng: StdRng) -> Self {
        let notes = match storage::load_notes(store.as_ref()) {
            Ok(notes) => {
                tracing::debug!("loaded {} notes", notes.len());
                notes
            }
            Err(e) => {
                tracing::error!("error loading notes: {}", e);
                Vec::new()
            }
        };
        let mut board = Self {
            notes,
            viewport,
            interaction: Interaction::Idle,
            editing: None,
            store,
            rng,
        };
        // Notes saved from a larger board are pulled back into view
        if board.clamp_notes() {
            tracing::debug!("clamped loaded notes into the viewport");
            board.persist();
        }
        board
    }

    /// All notes in insertion (and render) order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by id.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current pointer interaction.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// The open edit, if any.
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Returns `true` if `id` is the note in edit mode.
    pub fn is_editing(&self, id: NoteId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id() == id)
    }

    /// Replaces the viewport, pulling notes back inside the new bounds.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        if self.clamp_notes() {
            tracing::debug!(
                "viewport changed to {}x{}, clamped notes",
                viewport.width,
                viewport.height
            );
            self.persist();
        }
    }

    // -----------------------------------------------------------------------
    // Collection
    // -----------------------------------------------------------------------

    /// Creates an empty note at a random position and opens it for editing.
    ///
    /// Any draft open on another note is committed first.
    pub fn create_note(&mut self) -> NoteId {
        self.commit_edit();

        let position = self.random_position();
        let color = NoteColor::ALL[self.rng.gen_range(0..NoteColor::ALL.len())];
        let note = Note::new(self.next_id(), position, color);
        let id = note.id;
        tracing::debug!(
            "creating note {} at ({}, {}) with {}",
            id,
            position.x,
            position.y,
            color
        );

        self.notes.push(note);
        self.persist();
        self.editing = Some(EditSession::new(id, ""));
        id
    }

    /// Sets a note's content, clears its `is_new` flag, and closes edit mode.
    pub fn update_note(&mut self, id: NoteId, content: impl Into<String>) {
        self.editing = None;
        let content = content.into();
        let Some(note) = self.note_mut(id) else {
            tracing::debug!("update for unknown note {}", id);
            return;
        };
        tracing::debug!("updating note {} ({} bytes)", id, content.len());
        note.content = content;
        note.is_new = false;
        self.persist();
    }

    /// Removes a note. Returns `false` if no note has that id.
    ///
    /// An open edit or pointer interaction on the note is dropped with it.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }
        tracing::debug!("deleting note {}", id);

        if self.is_editing(id) {
            self.editing = None;
        }
        if self.interaction.note_id() == Some(id) {
            self.interaction = Interaction::Idle;
        }
        self.persist();
        true
    }

    // -----------------------------------------------------------------------
    // Edit mode
    // -----------------------------------------------------------------------

    /// Opens `id` for editing, committing any draft open on another note.
    pub fn begin_edit(&mut self, id: NoteId) {
        if self.is_editing(id) {
            return;
        }
        let Some(content) = self.note(id).map(|n| n.content.clone()) else {
            return;
        };
        self.commit_edit();
        self.editing = Some(EditSession::new(id, content));
    }

    /// Commits the open draft as the note's content. No-op when not editing.
    pub fn commit_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            let (id, draft) = session.into_parts();
            self.update_note(id, draft);
        }
    }

    /// Appends a character to the open draft.
    pub fn edit_insert(&mut self, c: char) {
        if let Some(session) = self.editing.as_mut() {
            session.insert(c);
        }
    }

    /// Appends a line break to the open draft.
    pub fn edit_newline(&mut self) {
        if let Some(session) = self.editing.as_mut() {
            session.newline();
        }
    }

    /// Deletes the last character of the open draft.
    pub fn edit_backspace(&mut self) {
        if let Some(session) = self.editing.as_mut() {
            session.backspace();
        }
    }

    // -----------------------------------------------------------------------
    // Pointer interaction
    // -----------------------------------------------------------------------

    /// Starts dragging `id` from its handle with the pointer at `pointer`.
    pub fn begin_drag(&mut self, id: NoteId, pointer: Position) {
        let Some(note) = self.note(id) else {
            return;
        };
        self.interaction = Interaction::Dragging {
            id,
            start_position: note.position,
            start_pointer: pointer,
        };
    }

    /// Starts resizing `id` from its corner with the pointer at `pointer`.
    pub fn begin_resize(&mut self, id: NoteId, pointer: Position) {
        let Some(note) = self.note(id) else {
            return;
        };
        self.interaction = Interaction::Resizing {
            id,
            start_size: note.size,
            start_pointer: pointer,
        };
    }

    /// Applies a pointer move to the active drag or resize.
    ///
    /// Drags clamp against the note's current size; resizes keep the
    /// top-left corner fixed.
    pub fn pointer_move(&mut self, pointer: Position) {
        let viewport = self.viewport;
        let changed = match self.interaction {
            Interaction::Idle => false,
            Interaction::Dragging {
                id,
                start_position,
                start_pointer,
            } => match self.note_mut(id) {
                Some(note) => {
                    let next =
                        (start_position + (pointer - start_pointer)).clamped_within(viewport, note.size);
                    let changed = next != note.position;
                    note.position = next;
                    changed
                }
                None => false,
            },
            Interaction::Resizing {
                id,
                start_size,
                start_pointer,
            } => match self.note_mut(id) {
                Some(note) => {
                    let next = start_size.resized_by(pointer - start_pointer);
                    let changed = next != note.size;
                    note.size = next;
                    changed
                }
                None => false,
            },
        };
        if changed {
            self.persist();
        }
    }

    /// Ends any drag or resize. Idempotent.
    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Moves every note inside the viewport. Returns `true` if any moved.
    fn clamp_notes(&mut self) -> bool {
        let viewport = self.viewport;
        let mut moved = false;
        for note in &mut self.notes {
            let clamped = note.position.clamped_within(viewport, note.size);
            if clamped != note.position {
                note.position = clamped;
                moved = true;
            }
        }
        moved
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save_notes(self.store.as_mut(), &self.notes) {
            tracing::error!("error saving notes: {}", e);
        }
    }

    /// Millisecond timestamp, bumped past the largest existing id.
    fn next_id(&self) -> NoteId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let floor = self
            .notes
            .iter()
            .map(|n| n.id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        NoteId(now.max(floor))
    }

    fn random_position(&mut self) -> Position {
        let x = random_offset(
            &mut self.rng,
            self.viewport.width - DEFAULT_NOTE_SIZE.width,
        );
        let y = random_offset(
            &mut self.rng,
            self.viewport.height - DEFAULT_NOTE_SIZE.height,
        );
        Position::new(x, y)
    }
}

/// Uniform draw from `[NEW_NOTE_MARGIN, upper]`, collapsing the range when
/// the viewport is too small for the margin.
fn random_offset(rng: &mut StdRng, upper: i32) -> i32 {
    let upper = upper.max(0);
    let lower = NEW_NOTE_MARGIN.min(upper);
    rng.gen_range(lower..=upper)
}
