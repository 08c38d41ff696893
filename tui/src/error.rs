//! UI Error Types
//!
//! Failures raised while composing a frame. None of these are user-facing:
//! bounds and argument errors are contract violations inside the element
//! tree, and surface errors are refusals from the drawing backend.

use thiserror::Error;

use crate::geometry::Vector2D;

/// Errors raised by a [`Surface`](crate::compositor::Surface) when it refuses a write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The write starts outside the addressable cell grid
    #[error("write at ({row}, {col}) is outside the {height}x{width} surface")]
    OutOfSurface {
        row: u16,
        col: u16,
        height: u16,
        width: u16,
    },
}

/// Errors raised while drawing screen elements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Local coordinates fall outside the element's own area
    #[error("local position ({}, {}) is out of bounds for a {}x{} region", .position.row, .position.col, .size.row, .size.col)]
    Bounds { position: Vector2D, size: Vector2D },

    /// An element was constructed with an argument it cannot render
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The surface refused a write and no handler swallowed it
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
