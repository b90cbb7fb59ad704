//! Board rendering.
//!
//! Lays out the board area and footer, draws every note in collection order
//! (later notes on top), and records the drawn cell rectangles on the
//! [`App`] for mouse hit-testing.

use crate::tui::app::App;
use crate::tui::glyph::Glyph;
use crate::tui::views::note::render_note;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Footer hints while no note is being edited.
pub const FOOTER_TEXT: &str = "[n] New  [drag top] Move  [◢] Resize  [✎] Edit  [✕] Delete  [q] Quit";

/// Footer hints in edit mode.
pub const EDITING_FOOTER_TEXT: &str = "[Enter] Save  [Shift+Enter] Newline  [Esc] Done";

/// Shown centered on an empty board.
pub const EMPTY_BOARD_TEXT: &str = "No notes yet. Press n or click + to add one.";

/// Board area of a frame: everything above the one-row footer.
pub fn board_area(area: Rect) -> Rect {
    Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1))
}

/// Location of the add button in the top-right corner of the board.
pub fn add_button_area(board: Rect) -> Rect {
    let width = 3.min(board.width);
    Rect::new(
        board.right().saturating_sub(width + 1).max(board.x),
        board.y,
        width,
        1.min(board.height),
    )
}

/// Renders the whole board.
pub fn render_board(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let board = board_area(area);
    app.set_board_area(board);

    app.note_areas.clear();
    let editing = app.board.editing();
    for note in app.board.notes() {
        let Some(rect) = app.scale.note_rect(board, note.position, note.size) else {
            continue;
        };
        let draft = editing.filter(|e| e.id() == note.id).map(|e| e.draft());
        render_note(frame, rect, note, draft);
        app.note_areas.push((note.id, rect));
    }

    if app.board.notes().is_empty() && board.height > 0 {
        let middle = Rect::new(board.x, board.y + board.height / 2, board.width, 1);
        frame.render_widget(
            Paragraph::new(EMPTY_BOARD_TEXT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            middle,
        );
    }

    app.add_button_area = add_button_area(board);
    frame.render_widget(
        Paragraph::new(format!(" {} ", Glyph::Add)).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        app.add_button_area,
    );

    if area.height > 0 {
        let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(Paragraph::new(render_footer(app, footer.width as usize)), footer);
    }
}

/// Footer line: a pending status message, or key hints with the note count
/// right-aligned when there is room.
fn render_footer(app: &App, width: usize) -> Line<'static> {
    if let Some((message, _)) = &app.status_message {
        return Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.board.editing().is_some() {
        EDITING_FOOTER_TEXT
    } else {
        FOOTER_TEXT
    };
    let count = match app.board.notes().len() {
        1 => "1 note".to_string(),
        n => format!("{n} notes"),
    };

    let hints_len = hints.chars().count();
    let count_len = count.chars().count();
    let hint_span = Span::styled(hints, Style::default().fg(Color::DarkGray));
    if width < hints_len + 2 + count_len {
        return Line::from(hint_span);
    }
    let padding = " ".repeat(width - hints_len - count_len);
    Line::from(vec![
        hint_span,
        Span::raw(padding),
        Span::styled(count, Style::default().fg(Color::Gray)),
    ])
}
