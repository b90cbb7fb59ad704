//! Sticky-note card view.
//!
//! A card occupies the cells computed by [`Scale::note_rect`]:
//!
//! ```text
//!          ⠿⠿⠿            <- handle row
//!  content (wrapped)
//!
//!                 ✎ ✕ ◢   <- icon row
//! ```
//!
//! In edit mode the content shows the draft with a cursor, and the edit and
//! delete icons are replaced by a single confirm icon.
//!
//! [`Scale::note_rect`]: crate::tui::scale::Scale::note_rect

use crate::note::{Note, NoteColor};
use crate::tui::glyph::{Glyph, GRIP_SYMBOL, RESIZE_SYMBOL};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

/// Cursor drawn after the draft in edit mode.
pub const CURSOR_SYMBOL: &str = "▌";

/// Body text color.
const TEXT_COLOR: Color = Color::Rgb(31, 41, 55);

/// Placeholder and icon color.
const MUTED_COLOR: Color = Color::Rgb(107, 114, 128);

/// Part of a note card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRegion {
    /// Top row; starts a drag.
    Handle,
    /// Content area.
    Body,
    /// Edit icon.
    Edit,
    /// Delete icon.
    Delete,
    /// Confirm icon, shown in edit mode.
    Confirm,
    /// Bottom-right corner; starts a resize.
    Resize,
}

/// Card background for a palette color.
pub fn background(color: NoteColor) -> Color {
    match color {
        NoteColor::Yellow => Color::Rgb(254, 249, 195),
        NoteColor::Green => Color::Rgb(220, 252, 231),
        NoteColor::Blue => Color::Rgb(219, 234, 254),
        NoteColor::Pink => Color::Rgb(252, 231, 243),
        NoteColor::Purple => Color::Rgb(243, 232, 255),
    }
}

/// Handle strip background, one shade darker than the card.
fn handle_background(color: NoteColor) -> Color {
    match color {
        NoteColor::Yellow => Color::Rgb(254, 240, 138),
        NoteColor::Green => Color::Rgb(187, 247, 208),
        NoteColor::Blue => Color::Rgb(191, 219, 254),
        NoteColor::Pink => Color::Rgb(251, 207, 232),
        NoteColor::Purple => Color::Rgb(233, 213, 255),
    }
}

/// Cells inside the card borders where content is drawn.
pub fn content_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Classifies the cell at (`column`, `row`) within a card drawn at `area`.
///
/// Returns `None` outside the card. Cards shorter than two rows are all
/// handle.
pub fn hit_region(area: Rect, editing: bool, column: u16, row: u16) -> Option<NoteRegion> {
    if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
        return None;
    }
    if area.height < 2 || row == area.y {
        return Some(NoteRegion::Handle);
    }

    let bottom = area.bottom() - 1;
    if row != bottom {
        return Some(NoteRegion::Body);
    }
    let offset = area.right() - column;
    let region = match offset {
        1 => NoteRegion::Resize,
        3 if editing => NoteRegion::Confirm,
        3 => NoteRegion::Delete,
        5 if !editing => NoteRegion::Edit,
        _ => NoteRegion::Body,
    };
    Some(region)
}

/// Renders a note card into `area`.
///
/// `draft` is the uncommitted text when the note is in edit mode.
pub fn render_note(frame: &mut Frame, area: Rect, note: &Note, draft: Option<&str>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let card_style = Style::default().bg(background(note.color)).fg(TEXT_COLOR);
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(card_style), area);

    let handle = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(GRIP_SYMBOL)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(handle_background(note.color))
                    .fg(MUTED_COLOR),
            ),
        handle,
    );

    let inner = content_area(area);
    if inner.width > 0 && inner.height > 0 {
        let content = match draft {
            Some(text) => Paragraph::new(Text::raw(format!("{text}{CURSOR_SYMBOL}"))),
            None if note.content.is_empty() => Paragraph::new(note.display_text()).style(
                Style::default()
                    .fg(MUTED_COLOR)
                    .add_modifier(Modifier::ITALIC),
            ),
            None => Paragraph::new(note.display_text()),
        };
        frame.render_widget(content.wrap(Wrap { trim: false }), inner);
    }

    if area.height < 2 {
        return;
    }
    let bottom = area.bottom() - 1;
    let icon_style = card_style.fg(MUTED_COLOR);
    let buf = frame.buffer_mut();
    buf.set_string(area.right() - 1, bottom, RESIZE_SYMBOL, icon_style);
    if area.width >= 3 {
        let icon = if draft.is_some() {
            Glyph::Confirm
        } else {
            Glyph::Close
        };
        buf.set_string(area.right() - 3, bottom, icon.symbol(), icon_style);
    }
    if area.width >= 5 && draft.is_none() {
        buf.set_string(area.right() - 5, bottom, Glyph::Edit.symbol(), icon_style);
    }
}
