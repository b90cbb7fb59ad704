//! Notes survive a restart: a board written through a `FileStore` is
//! reloaded intact by a fresh board over the same directory.

use postit::{Board, FileStore, NoteColor, Position, Size, Viewport, STORAGE_KEY};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

const VIEWPORT: Viewport = Viewport::new(1000, 800);

fn open(dir: &TempDir, seed: u64) -> Board {
    Board::with_rng(
        Box::new(FileStore::new(dir.path())),
        VIEWPORT,
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn board_state_survives_reload() {
    let dir = TempDir::new().expect("tempdir");

    let mut board = open(&dir, 1);
    let kept = board.create_note();
    board.edit_insert('h');
    board.edit_insert('i');
    board.commit_edit();
    let dropped = board.create_note();
    board.commit_edit();

    board.begin_drag(kept, Position::new(0, 0));
    board.pointer_move(Position::new(9000, 9000));
    board.pointer_up();
    board.begin_resize(kept, Position::new(0, 0));
    board.pointer_move(Position::new(-1000, 1000));
    board.pointer_up();
    assert!(board.delete_note(dropped));
    let color = board.note(kept).expect("note").color;
    drop(board);

    let reloaded = open(&dir, 2);
    assert_eq!(reloaded.notes().len(), 1);
    let note = &reloaded.notes()[0];
    assert_eq!(note.id, kept);
    assert_eq!(note.content, "hi");
    assert!(!note.is_new);
    assert_eq!(note.size, Size::new(200, 400));
    // The taller note no longer fits at y=600 and is pulled back in on load
    assert_eq!(note.position, Position::new(800, 400));
    assert_eq!(note.color, color);
    assert!(NoteColor::ALL.contains(&note.color));
}

#[test]
fn store_file_uses_persisted_layout() {
    let dir = TempDir::new().expect("tempdir");
    let mut board = open(&dir, 3);
    let id = board.create_note();

    let raw = fs::read_to_string(dir.path().join(format!("{STORAGE_KEY}.json")))
        .expect("store written on create");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    let note = &value[0];
    assert_eq!(note["id"], serde_json::json!(id.0));
    assert_eq!(note["content"], serde_json::json!(""));
    assert_eq!(note["isNew"], serde_json::json!(true));
    assert_eq!(note["size"], serde_json::json!({"width": 200, "height": 200}));
    assert!(note["color"].as_str().expect("color").starts_with("bg-"));
}

#[test]
fn corrupt_store_starts_empty_and_is_replaced_on_first_change() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), "[{]").expect("write");

    let mut board = open(&dir, 4);
    assert!(board.notes().is_empty());
    board.create_note();
    drop(board);

    assert_eq!(open(&dir, 5).notes().len(), 1);
}

#[test]
fn no_temp_files_are_left_behind() {
    let dir = TempDir::new().expect("tempdir");
    let mut board = open(&dir, 6);
    for _ in 0..3 {
        board.create_note();
    }
    let names: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{STORAGE_KEY}.json")]);
}
