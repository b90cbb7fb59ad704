pub(crate) use super::*;
pub(crate) use crate::storage::{MemoryStore, STORAGE_KEY};
pub(crate) use crate::tui::test_utils::{make_app_with_store, render_board_to_buffer};

mod lifecycle;
mod mouse;

/// Width and height of the test terminal. The board is 120x40 cells, a
/// 1200x800 unit viewport at the default scale.
pub(crate) const WIDTH: u16 = 120;
pub(crate) const HEIGHT: u16 = 41;

/// A 200x200 note at (100, 100): cells x 10..30, y 5..15.
pub(crate) const NOTE_ONE: &str = r#"{"id":1,"content":"one","position":{"x":100,"y":100},"size":{"width":200,"height":200},"color":"bg-yellow-100","isNew":false}"#;

/// Same geometry as [`NOTE_ONE`], stacked on top of it.
pub(crate) const NOTE_TWO: &str = r#"{"id":2,"content":"two","position":{"x":100,"y":100},"size":{"width":200,"height":200},"color":"bg-blue-100","isNew":false}"#;

/// Builds a rendered app whose store holds `notes`.
pub(crate) fn app_with_notes(notes: &[&str]) -> App {
    let json = format!("[{}]", notes.join(","));
    let store = MemoryStore::with_entry(STORAGE_KEY, &json);
    let mut app = make_app_with_store(store, WIDTH, HEIGHT);
    render_board_to_buffer(&mut app, WIDTH, HEIGHT);
    app
}

pub(crate) fn make_mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::NONE,
    }
}

pub(crate) fn press(app: &mut App, column: u16, row: u16) {
    app.handle_mouse_event(make_mouse_event(
        MouseEventKind::Down(MouseButton::Left),
        column,
        row,
    ));
}

pub(crate) fn drag(app: &mut App, column: u16, row: u16) {
    app.handle_mouse_event(make_mouse_event(
        MouseEventKind::Drag(MouseButton::Left),
        column,
        row,
    ));
}

pub(crate) fn release(app: &mut App, column: u16, row: u16) {
    app.handle_mouse_event(make_mouse_event(
        MouseEventKind::Up(MouseButton::Left),
        column,
        row,
    ));
}
