//! Board geometry: positions, sizes, the viewport, and the clamping rules
//! that keep notes on screen and within their size limits.
//!
//! All values are in board units. The terminal front end converts mouse cells
//! to board units with [`crate::tui::scale::Scale`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Narrowest a note may be resized to.
pub const MIN_NOTE_WIDTH: i32 = 200;
/// Widest a note may be resized to.
pub const MAX_NOTE_WIDTH: i32 = 400;
/// Shortest a note may be resized to.
pub const MIN_NOTE_HEIGHT: i32 = 150;
/// Tallest a note may be resized to.
pub const MAX_NOTE_HEIGHT: i32 = 400;

/// Size given to new notes and assumed for stored notes without one.
pub const DEFAULT_NOTE_SIZE: Size = Size {
    width: 200,
    height: 200,
};

/// Constrains `value` to `[lo, hi]` as `max(lo, min(hi, value))`.
///
/// Unlike [`Ord::clamp`] this never panics: when `hi < lo` (a note larger
/// than the viewport) the lower bound wins.
pub fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    lo.max(hi.min(value))
}

/// Offset from the viewport's top-left corner. Also used for pointer
/// coordinates and pointer deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position clamped so a note of `size` stays inside `viewport`.
    pub fn clamped_within(self, viewport: Viewport, size: Size) -> Self {
        Self {
            x: clamp(self.x, 0, viewport.width - size.width),
            y: clamp(self.y, 0, viewport.height - size.height),
        }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Width and height of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Creates a size without applying limits.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grows this size by `delta` and clamps each axis to the note limits.
    pub fn resized_by(self, delta: Position) -> Self {
        Self {
            width: clamp(
                self.width.saturating_add(delta.x),
                MIN_NOTE_WIDTH,
                MAX_NOTE_WIDTH,
            ),
            height: clamp(
                self.height.saturating_add(delta.y),
                MIN_NOTE_HEIGHT,
                MAX_NOTE_HEIGHT,
            ),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        DEFAULT_NOTE_SIZE
    }
}

/// Dimensions of the visible board area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Visible width.
    pub width: i32,
    /// Visible height.
    pub height: i32,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
