use super::*;
use crate::board::Interaction;
use crate::geometry::Size;

#[test]
fn pressing_the_handle_starts_a_drag() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 15, 5);
    assert!(matches!(
        app.board.interaction(),
        Interaction::Dragging { id: NoteId(1), .. }
    ));
    assert!(app.pointer_captured());
}

#[test]
fn dragging_moves_note_by_pointer_delta() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 15, 5);
    drag(&mut app, 25, 10);
    let note = app.board.note(NoteId(1)).expect("note");
    assert_eq!(note.position, Position::new(200, 200));
}

#[test]
fn dragging_past_the_edge_clamps_to_viewport() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 15, 5);
    drag(&mut app, 119, 39);
    let note = app.board.note(NoteId(1)).expect("note");
    assert_eq!(note.position, Position::new(1000, 600));
}

#[test]
fn release_ends_the_drag_and_capture() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 15, 5);
    drag(&mut app, 16, 6);
    release(&mut app, 16, 6);
    assert_eq!(app.board.interaction(), Interaction::Idle);
    assert!(!app.pointer_captured());

    // Motion after release is ignored
    drag(&mut app, 40, 20);
    let note = app.board.note(NoteId(1)).expect("note");
    assert_eq!(note.position, Position::new(110, 120));
}

#[test]
fn pressing_the_corner_resizes_within_limits() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 29, 14);
    assert!(matches!(
        app.board.interaction(),
        Interaction::Resizing { id: NoteId(1), .. }
    ));
    drag(&mut app, 49, 9);
    let note = app.board.note(NoteId(1)).expect("note");
    assert_eq!(note.size, Size::new(400, 150));
    assert_eq!(note.position, Position::new(100, 100));
}

#[test]
fn edit_icon_opens_edit_mode_with_current_content() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 25, 14);
    let edit = app.board.editing().expect("editing");
    assert_eq!(edit.id(), NoteId(1));
    assert_eq!(edit.draft(), "one");
    assert_eq!(app.board.interaction(), Interaction::Idle);
}

#[test]
fn pressing_inside_the_editor_keeps_it_open() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 25, 14);
    app.board.edit_insert('!');
    press(&mut app, 15, 8);
    assert_eq!(app.board.editing().map(|e| e.draft()), Some("one!"));
}

#[test]
fn confirm_icon_commits_the_draft() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 25, 14);
    app.board.edit_insert('!');
    press(&mut app, 27, 14);
    assert!(app.board.editing().is_none());
    assert_eq!(app.board.note(NoteId(1)).expect("note").content, "one!");
}

#[test]
fn pressing_empty_board_commits_the_draft() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 25, 14);
    app.board.edit_backspace();
    press(&mut app, 80, 30);
    assert!(app.board.editing().is_none());
    assert_eq!(app.board.note(NoteId(1)).expect("note").content, "on");
}

#[test]
fn dragging_an_edited_note_commits_first() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 25, 14);
    app.board.edit_insert('?');
    press(&mut app, 15, 5);
    assert!(app.board.editing().is_none());
    assert_eq!(app.board.note(NoteId(1)).expect("note").content, "one?");
    assert!(app.board.interaction().is_active());
}

#[test]
fn delete_icon_removes_note_and_sets_status() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    press(&mut app, 27, 14);
    assert!(app.board.notes().is_empty());
    let (message, _) = app.status_message.as_ref().expect("status");
    assert_eq!(message, "Deleted note");
}

#[test]
fn topmost_note_receives_the_press() {
    let mut app = app_with_notes(&[NOTE_ONE, NOTE_TWO]);
    press(&mut app, 27, 14);
    let ids: Vec<_> = app.board.notes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![NoteId(1)]);
}

#[test]
fn add_button_creates_note_in_edit_mode() {
    let mut app = app_with_notes(&[]);
    let button = app.add_button_area;
    press(&mut app, button.x + 1, button.y);
    assert_eq!(app.board.notes().len(), 1);
    let id = app.board.notes()[0].id;
    assert!(app.board.is_editing(id));
}

#[test]
fn right_button_is_ignored() {
    let mut app = app_with_notes(&[NOTE_ONE]);
    app.handle_mouse_event(make_mouse_event(
        MouseEventKind::Down(MouseButton::Right),
        27,
        14,
    ));
    assert_eq!(app.board.notes().len(), 1);
}
