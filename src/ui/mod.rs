//! Terminal UI components
//!
//! All UI widgets and rendering logic using ratatui. Widgets hold view
//! state only (cursors, scroll offsets); query state lives in the db layer
//! and is borrowed at render time.

pub mod editor;
pub mod layout;
pub mod render;
pub mod results;
pub mod tables;
pub mod theme;

/// Outcome of offering a key event to a text-input widget.
/// Widgets never mutate siblings; the `App` decides what happens next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    /// Event consumed, no further action needed
    Consumed,
    /// Event not handled, parent should try
    Ignored,
}
