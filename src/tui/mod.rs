//! Terminal front end for the note board.
//!
//! Built on ratatui and crossterm. Notes are drawn as colored cards handled
//! with the mouse; the keyboard types into the note in edit mode.

pub mod app;
pub mod capture;
pub mod event;
pub mod glyph;
pub mod scale;
pub mod ui;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;
