//! Conversion between terminal cells and board units.

use crate::config::schema::BoardConfig;
use crate::geometry::{Position, Size, Viewport};
use ratatui::layout::Rect;

/// Board units covered by one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Units per column.
    pub cell_width: i32,
    /// Units per row.
    pub cell_height: i32,
}

impl Default for Scale {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl Scale {
    /// Creates a scale. Zero dimensions are raised to 1.
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: i32::from(cell_width.max(1)),
            cell_height: i32::from(cell_height.max(1)),
        }
    }

    /// Scale configured in the `[board]` section.
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.cell_width, config.cell_height)
    }

    /// Board viewport covering `area`.
    pub fn viewport(&self, area: Rect) -> Viewport {
        Viewport::new(
            i32::from(area.width) * self.cell_width,
            i32::from(area.height) * self.cell_height,
        )
    }

    /// Board position of the terminal cell at (`column`, `row`).
    pub fn pointer(&self, area: Rect, column: u16, row: u16) -> Position {
        Position::new(
            (i32::from(column) - i32::from(area.x)) * self.cell_width,
            (i32::from(row) - i32::from(area.y)) * self.cell_height,
        )
    }

    /// Cells covered by a note, clipped to `area`.
    ///
    /// Returns `None` when nothing of the note is visible.
    pub fn note_rect(&self, area: Rect, position: Position, size: Size) -> Option<Rect> {
        let left = i32::from(area.x) + div_round(position.x, self.cell_width);
        let top = i32::from(area.y) + div_round(position.y, self.cell_height);
        let right = left + div_round(size.width, self.cell_width).max(1);
        let bottom = top + div_round(size.height, self.cell_height).max(1);

        let left = left.max(i32::from(area.x));
        let top = top.max(i32::from(area.y));
        let right = right.min(i32::from(area.right()));
        let bottom = bottom.min(i32::from(area.bottom()));
        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect::new(
            u16::try_from(left).ok()?,
            u16::try_from(top).ok()?,
            u16::try_from(right - left).ok()?,
            u16::try_from(bottom - top).ok()?,
        ))
    }
}

/// `value / divisor` rounded to the nearest integer.
fn div_round(value: i32, divisor: i32) -> i32 {
    (f64::from(value) / f64::from(divisor)).round() as i32
}
