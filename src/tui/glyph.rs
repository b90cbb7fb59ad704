//! Icon glyphs drawn on the board.

use std::fmt;

/// Affordance icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Create a note.
    Add,
    /// Delete a note.
    Close,
    /// Enter edit mode.
    Edit,
    /// Leave edit mode, keeping the draft.
    Confirm,
}

impl Glyph {
    /// The symbol drawn for this glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Add => "+",
            Glyph::Close => "✕",
            Glyph::Edit => "✎",
            Glyph::Confirm => "✓",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Resize corner marker.
pub const RESIZE_SYMBOL: &str = "◢";

/// Drag handle grip.
pub const GRIP_SYMBOL: &str = "⠿⠿⠿";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_single_cell() {
        for glyph in [Glyph::Add, Glyph::Close, Glyph::Edit, Glyph::Confirm] {
            assert_eq!(glyph.symbol().chars().count(), 1, "{glyph:?}");
        }
        assert_eq!(RESIZE_SYMBOL.chars().count(), 1);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Glyph::Confirm.to_string(), "✓");
    }
}
