//! Drawing Surface
//!
//! The character-cell grid that elements draw into. The production surface
//! is the ratatui [`Buffer`] handed out by `Terminal::draw`; tests use the
//! buffer of a `TestBackend`.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

use crate::error::SurfaceError;
use crate::geometry::{Rect, Vector2D};

/// Cell-addressed drawing target
pub trait Surface {
    /// The full addressable area
    fn area(&self) -> Rect;

    /// Write `text` starting at the absolute position `at`.
    ///
    /// Text running past the right edge is clipped. Fails when `at` itself
    /// lies outside the surface.
    fn put_str(&mut self, at: Vector2D, text: &str, style: Style) -> Result<(), SurfaceError>;
}

impl Surface for Buffer {
    fn area(&self) -> Rect {
        self.area.into()
    }

    fn put_str(&mut self, at: Vector2D, text: &str, style: Style) -> Result<(), SurfaceError> {
        let area = self.area;
        let (x, y) = (at.col, at.row);
        if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
            return Err(SurfaceError::OutOfSurface {
                row: at.row,
                col: at.col,
                height: area.height,
                width: area.width,
            });
        }

        let max_width = (area.right() - x) as usize;
        self.set_stringn(x, y, text, max_width, style);
        Ok(())
    }
}
