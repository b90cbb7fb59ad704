/// Sticky-note card rendering and hit-testing.
pub mod note;
