//! Screen Element Compositor
//!
//! Elements are transient values built for one frame. Each one draws into a
//! [`Region`]: a borrowed [`Surface`] paired with the element's absolute
//! [`Rect`]. A region translates local coordinates, clips strings to its own
//! width, and hands sub-rectangles to child elements.
//!
//! ```ignore
//! let mut region = Region::full(&mut buffer);
//! region.draw_sub(&Monitor::new("beep", Some(42)))?;
//! ```

mod surface;

use ratatui::style::Style;

use crate::error::{SurfaceError, UiError};
use crate::geometry::{Rect, Vector2D};

pub use surface::Surface;

/// Anything that can render itself into a region
pub trait ScreenElement {
    /// Render the element. The region's area is the element's whole area.
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError>;
}

/// Closures act as inline elements
impl<F> ScreenElement for F
where
    F: Fn(&mut Region<'_>) -> Result<(), UiError>,
{
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError> {
        self(region)
    }
}

/// Pin a closure's signature so it can be used as an inline element
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(&mut Region<'_>) -> Result<(), UiError>,
{
    f
}

/// A surface handle scoped to one absolute rectangle
pub struct Region<'s> {
    surface: &'s mut dyn Surface,
    area: Rect,
}

impl<'s> Region<'s> {
    /// Scope `surface` to `area` (absolute coordinates)
    pub fn new(surface: &'s mut dyn Surface, area: Rect) -> Self {
        Self { surface, area }
    }

    /// Scope `surface` to everything it can address
    pub fn full(surface: &'s mut dyn Surface) -> Self {
        let area = surface.area();
        Self::new(surface, area)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn offset(&self) -> Vector2D {
        self.area.offset
    }

    pub fn size(&self) -> Vector2D {
        self.area.size
    }

    /// Translate local coordinates to absolute ones
    pub fn abs_coords(&self, row: u16, col: u16) -> Result<Vector2D, UiError> {
        let (offset, size) = self.area.into_parts();
        if row >= size.row || col >= size.col {
            return Err(UiError::Bounds {
                position: Vector2D::new(row, col),
                size,
            });
        }
        Ok(offset.saturating_add(Vector2D::new(row, col)))
    }

    /// Draw `text` at local `(row, col)`, ignoring surface refusals
    pub fn draw_str(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<(), UiError> {
        self.draw_str_with(row, col, text, style, |_| {})
    }

    /// Draw `text` at local `(row, col)`, truncated to the region's width.
    ///
    /// Out-of-range coordinates are a [`UiError::Bounds`]; a surface refusal
    /// goes to `on_error` instead.
    pub fn draw_str_with<F>(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        style: Style,
        on_error: F,
    ) -> Result<(), UiError>
    where
        F: FnOnce(SurfaceError),
    {
        let at = self.abs_coords(row, col)?;
        let room = (self.area.width() - col) as usize;
        let clipped: String = text.chars().take(room).collect();
        if let Err(err) = self.surface.put_str(at, &clipped, style) {
            on_error(err);
        }
        Ok(())
    }

    /// Resolve a rect relative to this region.
    ///
    /// The offset is shifted by our own offset and the size is clamped to our
    /// own size. The offset itself is not checked against our bounds.
    pub fn inner_area(&self, relative: Rect) -> Rect {
        Rect::new(
            self.area.offset.saturating_add(relative.offset),
            self.area.size.min(relative.size),
        )
    }

    /// Draw a child over this region's entire area
    pub fn draw_sub<E>(&mut self, element: &E) -> Result<(), UiError>
    where
        E: ScreenElement + ?Sized,
    {
        let area = self.area;
        self.draw_child(area, element)
    }

    /// Draw a child in `relative` (see [`Region::inner_area`])
    pub fn draw_sub_in<E>(&mut self, relative: Rect, element: &E) -> Result<(), UiError>
    where
        E: ScreenElement + ?Sized,
    {
        let area = self.inner_area(relative);
        self.draw_child(area, element)
    }

    fn draw_child<E>(&mut self, area: Rect, element: &E) -> Result<(), UiError>
    where
        E: ScreenElement + ?Sized,
    {
        // zero-sized regions draw nothing
        if area.is_empty() {
            return Ok(());
        }
        let mut child = Region::new(&mut *self.surface, area);
        element.draw(&mut child)
    }
}
