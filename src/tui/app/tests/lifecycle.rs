use super::*;
use crate::tui::test_utils::make_app;

#[test]
fn new_app_is_idle() {
    let app = make_app(80, 24);
    assert!(!app.should_quit);
    assert_eq!(app.tick_count, 0);
    assert!(app.status_message.is_none());
    assert!(!app.pointer_captured());
}

#[test]
fn capture_follows_board_interaction() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    app.board.begin_resize(NoteId(1), Position::new(0, 0));
    app.sync_pointer_capture();
    assert!(app.pointer_captured());

    app.board.pointer_up();
    app.sync_pointer_capture();
    assert!(!app.pointer_captured());
}

#[test]
fn deleting_the_dragged_note_releases_capture() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 15, 5);
    assert!(app.pointer_captured());

    app.board.delete_note(NoteId(1));
    app.sync_pointer_capture();
    assert!(!app.pointer_captured());
}

#[test]
fn shrinking_the_board_pulls_notes_inside() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    app.set_board_area(Rect::new(0, 0, 25, 10));
    assert_eq!(app.board.viewport(), crate::geometry::Viewport::new(250, 200));
    let note = app.board.note(NoteId(1)).expect("note");
    assert_eq!(note.position, Position::new(50, 0));
}

#[test]
fn render_tracks_terminal_resize() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    render_board_to_buffer(&mut app, 60, 21);
    assert_eq!(app.board_area, Rect::new(0, 0, 60, 20));
    assert_eq!(app.board.viewport(), crate::geometry::Viewport::new(600, 400));
}

#[test]
fn status_message_expires() {
    let mut app = make_app(80, 24);
    app.set_status("Deleted note");
    app.expire_status_message();
    assert!(app.status_message.is_some());

    app.status_message = Some(("old".to_string(), Instant::now() - Duration::from_secs(1)));
    app.expire_status_message();
    assert!(app.status_message.is_none());
}
