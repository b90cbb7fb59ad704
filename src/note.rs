//! The note entity and its color palette.

use crate::geometry::{Position, Size};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Text shown in place of an empty note's content.
pub const EMPTY_NOTE_PLACEHOLDER: &str = "Empty note...";

/// Unique note identifier, derived from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Background color of a note, stored as its palette token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteColor {
    /// `bg-yellow-100`
    #[serde(rename = "bg-yellow-100")]
    Yellow,
    /// `bg-green-100`
    #[serde(rename = "bg-green-100")]
    Green,
    /// `bg-blue-100`
    #[serde(rename = "bg-blue-100")]
    Blue,
    /// `bg-pink-100`
    #[serde(rename = "bg-pink-100")]
    Pink,
    /// `bg-purple-100`
    #[serde(rename = "bg-purple-100")]
    Purple,
}

impl NoteColor {
    /// The full palette, in draw order.
    pub const ALL: [NoteColor; 5] = [
        NoteColor::Yellow,
        NoteColor::Green,
        NoteColor::Blue,
        NoteColor::Pink,
        NoteColor::Purple,
    ];

    /// Palette token as persisted.
    pub fn token(self) -> &'static str {
        match self {
            NoteColor::Yellow => "bg-yellow-100",
            NoteColor::Green => "bg-green-100",
            NoteColor::Blue => "bg-blue-100",
            NoteColor::Pink => "bg-pink-100",
            NoteColor::Purple => "bg-purple-100",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A single sticky note.
///
/// Serialized with the field names of the persisted layout (`isNew` in
/// camelCase). `size` and `isNew` may be absent from stored data, and a
/// `null` size reads as the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique key for lookup and rendering.
    pub id: NoteId,
    /// Free-form text. May be empty.
    pub content: String,
    /// Top-left corner on the board.
    pub position: Position,
    /// Card dimensions.
    #[serde(default, deserialize_with = "size_or_default")]
    pub size: Size,
    /// Background color, fixed at creation.
    pub color: NoteColor,
    /// Set at creation, cleared on the first content save.
    #[serde(default)]
    pub is_new: bool,
}

impl Note {
    /// Creates an empty, freshly created note with the default size.
    pub fn new(id: NoteId, position: Position, color: NoteColor) -> Self {
        Self {
            id,
            content: String::new(),
            position,
            size: Size::default(),
            color,
            is_new: true,
        }
    }

    /// Text to display when the note is not being edited.
    pub fn display_text(&self) -> &str {
        if self.content.is_empty() {
            EMPTY_NOTE_PLACEHOLDER
        } else {
            &self.content
        }
    }
}

/// Reads an optional size, mapping `null` to the default.
fn size_or_default<'de, D>(deserializer: D) -> Result<Size, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Size>::deserialize(deserializer)?.unwrap_or_default())
}
