//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, mouse dispatch onto the
//! board, and the core render loop.

use crate::board::Board;
use crate::geometry::Position;
use crate::note::NoteId;
use crate::tui::capture::{EnableClickTracking, PointerCapture};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::scale::Scale;
use crate::tui::ui::render_board;
use crate::tui::views::note::{hit_region, NoteRegion};
use crossterm::event::{
    DisableMouseCapture, EventStream, KeyboardEnhancementFlags, MouseButton, MouseEvent,
    MouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How long a footer status message stays visible.
const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(2);

/// Set when keyboard enhancement flags were pushed and must be popped.
static KEYBOARD_ENHANCED: AtomicBool = AtomicBool::new(false);

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// The note board.
    pub board: Board,
    /// Cell to board unit conversion.
    pub scale: Scale,
    /// Housekeeping tick interval.
    pub tick_rate: Duration,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Cell rectangles of the notes drawn in the last frame, bottom to top.
    ///
    /// Updated during each render pass and used for mouse hit-testing.
    pub note_areas: Vec<(NoteId, Rect)>,
    /// Cell rectangle of the add button in the last frame.
    pub add_button_area: Rect,
    /// Cells the board occupies, excluding the footer.
    pub board_area: Rect,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Held while a drag or resize is active.
    capture: Option<PointerCapture>,
    /// Where motion tracking escape codes are written.
    capture_sink: fn() -> Box<dyn Write>,
}

fn stdout_sink() -> Box<dyn Write> {
    Box::new(stdout())
}

impl App {
    /// Creates an app around a loaded board.
    pub fn new(board: Board, scale: Scale, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            board,
            scale,
            tick_rate,
            tick_count: 0,
            note_areas: Vec::new(),
            add_button_area: Rect::default(),
            board_area: Rect::default(),
            status_message: None,
            capture: None,
            capture_sink: stdout_sink,
        }
    }

    /// Redirects pointer capture escape codes (stdout by default).
    pub fn with_capture_sink(mut self, sink: fn() -> Box<dyn Write>) -> Self {
        self.capture_sink = sink;
        self
    }

    /// Records the board's cell area and resizes the viewport to match.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
        self.board.set_viewport(self.scale.viewport(area));
    }

    /// Shows `message` in the footer for a short while.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_DURATION));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Returns `true` while motion tracking is enabled.
    pub fn pointer_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Board position of a terminal cell.
    fn pointer(&self, column: u16, row: u16) -> Position {
        self.scale.pointer(self.board_area, column, row)
    }

    /// Topmost note drawn at the given cell and the part of it under the pointer.
    fn note_at(&self, column: u16, row: u16) -> Option<(NoteId, NoteRegion)> {
        self.note_areas.iter().rev().find_map(|&(id, rect)| {
            hit_region(rect, self.board.is_editing(id), column, row).map(|region| (id, region))
        })
    }

    /// Handles mouse events: presses on notes and the add button, drag
    /// motion, and release.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                let pointer = self.pointer(mouse.column, mouse.row);
                self.board.pointer_move(pointer);
            }
            MouseEventKind::Up(_) => self.board.pointer_up(),
            _ => {}
        }
        self.sync_pointer_capture();
    }

    fn handle_press(&mut self, column: u16, row: u16) {
        if self.add_button_area.contains((column, row).into()) {
            self.board.create_note();
            return;
        }

        let Some((id, region)) = self.note_at(column, row) else {
            // Clicking empty board blurs the editor
            self.board.commit_edit();
            return;
        };
        tracing::trace!("press on note {} at {:?}", id, region);

        // Any press outside the open editor's text area commits it
        if !(self.board.is_editing(id) && region == NoteRegion::Body) {
            self.board.commit_edit();
        }

        let pointer = self.pointer(column, row);
        match region {
            NoteRegion::Handle => self.board.begin_drag(id, pointer),
            NoteRegion::Resize => self.board.begin_resize(id, pointer),
            NoteRegion::Edit => self.board.begin_edit(id),
            NoteRegion::Delete => {
                if self.board.delete_note(id) {
                    self.set_status("Deleted note");
                }
            }
            NoteRegion::Confirm | NoteRegion::Body => {}
        }
    }

    /// Acquires or releases motion tracking to match the board interaction.
    pub fn sync_pointer_capture(&mut self) {
        let active = self.board.interaction().is_active();
        if active && self.capture.is_none() {
            match PointerCapture::acquire((self.capture_sink)()) {
                Ok(capture) => self.capture = Some(capture),
                Err(e) => tracing::warn!("failed to enable pointer motion tracking: {}", e),
            }
        } else if !active {
            self.capture = None;
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    ///
    /// An open draft is committed before the terminal is restored.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        self.capture = None;
        self.board.commit_edit();
        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_board(frame, self))?;

        loop {
            let event = event_handler.next(&mut reader).await?;
            let should_render = match event {
                Event::Key(key) => {
                    if handle_key_event(self, key) == Action::Quit {
                        self.should_quit = true;
                        return Ok(());
                    }
                    true
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                    true
                }
                Event::Tick => {
                    self.tick_count += 1;
                    let had_message = self.status_message.is_some();
                    self.expire_status_message();
                    had_message && self.status_message.is_none()
                }
                Event::Resize(_, _) => true,
            };

            if should_render {
                terminal.draw(|frame| render_board(frame, self))?;
            }
        }
    }
}

/// Enables raw mode, switches to the alternate screen, and turns on click
/// reporting. Keyboard enhancement is requested where supported so that
/// Shift+Enter can be told apart from Enter.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableClickTracking)?;
    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        KEYBOARD_ENHANCED.store(true, Ordering::SeqCst);
    }
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut out = stdout();
    if KEYBOARD_ENHANCED.swap(false, Ordering::SeqCst) {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
