//! Terminal Backend
//!
//! The seam between the render loop and the real terminal. The loop only
//! sees [`TerminalBackend`]: non-blocking input, a per-frame drawing
//! callback, the bell, and teardown. [`CrosstermTerminal`] is the production
//! implementation; tests drive the loop with a ratatui `TestBackend`.

mod terminal;

use std::io;

use crate::compositor::Surface;
use crate::geometry::Rect;

pub use terminal::{restore_terminal, CrosstermTerminal};

/// One input event, reduced to what the loop cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Nothing pending
    None,
    /// ESC pressed
    Escape,
    /// Ctrl+C pressed (raw mode swallows SIGINT)
    Interrupt,
    /// Any mouse activity; consumed so the wheel does not scroll the terminal
    Mouse,
    /// Anything else (other keys, focus, paste, resize)
    Other,
}

/// Terminal collaborator driven by the render loop
pub trait TerminalBackend {
    /// Current full drawing area
    fn area(&self) -> io::Result<Rect>;

    /// Next pending event, or [`InputEvent::None`] without blocking
    fn poll_event(&mut self) -> io::Result<InputEvent>;

    /// Clear the surface, let `draw` fill it, then flush the frame
    fn render(&mut self, draw: &mut dyn FnMut(&mut dyn Surface)) -> io::Result<()>;

    /// Emit the audible/visual cue
    fn cue(&mut self) -> io::Result<()>;

    /// Leave the terminal usable again: blocking input, cleared screen
    fn restore(&mut self) -> io::Result<()>;
}
