//! spnoiser - a terminal noise monitor
//!
//! Fills the terminal with repeating noise text and keeps beeping (or
//! looping a sound file) until the user presses ESC or the time runs out.
//!
//! # Architecture
//!
//! - **Geometry**: `Vector2D` / `Rect` value types in absolute cell coordinates
//! - **Compositor**: `Region` + `ScreenElement`, clipped drawing and child delegation
//! - **Widgets**: border box, noise fillers, countdown, exit hint, and the `Monitor` root
//! - **App**: fixed-rate tick loop with input draining and the bell fallback
//! - **Audio**: background clip loop that downgrades to the bell on failure
//! - **Backend**: crossterm terminal behind the `TerminalBackend` seam
//! - **Logging**: stderr log writer that goes quiet while the session owns the screen

pub mod app;
pub mod audio;
pub mod backend;
pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod theme;
pub mod widgets;

pub use app::{App, SessionState, StopReason};
pub use config::SessionConfig;
