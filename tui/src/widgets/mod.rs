//! Screen Elements
//!
//! The fixed set of elements a frame is composed from. [`Monitor`] is the
//! root; the others are its children.

mod border_box;
mod exit_hint;
mod filler;
mod monitor;
mod remaining_time;

pub use border_box::BorderBox;
pub use exit_hint::{ExitHint, EXIT_HINT};
pub use filler::{fill_line, Density, Filler};
pub use monitor::{Monitor, MonitorLayout};
pub use remaining_time::{format_remaining, RemainingTime};
