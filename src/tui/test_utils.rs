//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helpers for creating test terminals, extracting buffer content,
//! and building an [`App`] over an in-memory store.

#![cfg(test)]

use crate::board::Board;
use crate::storage::MemoryStore;
use crate::tui::app::App;
use crate::tui::scale::Scale;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use std::time::Duration;

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    (0..buffer.area().height).find(|&row| row_text(buffer, row).contains(text))
}

/// Builds an app over an empty in-memory store sized for a `width`x`height`
/// terminal. Placement is seeded so tests are deterministic.
pub fn make_app(width: u16, height: u16) -> App {
    make_app_with_store(MemoryStore::new(), width, height)
}

/// Like [`make_app`], loading from `store`.
pub fn make_app_with_store(store: MemoryStore, width: u16, height: u16) -> App {
    let scale = Scale::default();
    let area = crate::tui::ui::board_area(Rect::new(0, 0, width, height));
    let board = Board::with_rng(
        Box::new(store),
        scale.viewport(area),
        StdRng::seed_from_u64(7),
    );
    App::new(board, scale, Duration::from_millis(250))
        .with_capture_sink(|| Box::new(std::io::sink()))
}

/// Renders the full board to a buffer and returns it for inspection.
pub fn render_board_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            crate::tui::ui::render_board(frame, app);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_has_requested_size() {
        let terminal = test_terminal(80, 24);
        let size = terminal.size().expect("should have size");
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn row_text_extracts_row_content() {
        let mut terminal = test_terminal(20, 5);
        terminal
            .draw(|frame| {
                let para = ratatui::widgets::Paragraph::new("Hello World");
                frame.render_widget(para, frame.area());
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 0).contains("Hello World"));
        assert_eq!(row_text(buffer, 9), "");
    }

    #[test]
    fn make_app_viewport_excludes_footer() {
        let app = make_app(100, 41);
        assert_eq!(app.board.viewport(), crate::geometry::Viewport::new(1000, 800));
    }
}
