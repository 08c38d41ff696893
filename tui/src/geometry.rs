//! Geometry Primitives
//!
//! Plain value types for terminal cell coordinates. Every [`Rect`] handed to
//! a screen element is expressed in absolute terminal coordinates.

/// A `(row, col)` pair: either a position or a size (rows = height, cols = width)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2D {
    /// Row (y) component
    pub row: u16,
    /// Column (x) component
    pub col: u16,
}

impl Vector2D {
    /// Create a new vector
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Componentwise sum, saturating at the edge of the coordinate space
    pub const fn saturating_add(self, other: Self) -> Self {
        Self::new(
            self.row.saturating_add(other.row),
            self.col.saturating_add(other.col),
        )
    }

    /// Componentwise minimum
    pub fn min(self, other: Self) -> Self {
        Self::new(self.row.min(other.row), self.col.min(other.col))
    }
}

impl From<(u16, u16)> for Vector2D {
    fn from((row, col): (u16, u16)) -> Self {
        Self::new(row, col)
    }
}

impl From<Vector2D> for (u16, u16) {
    fn from(v: Vector2D) -> Self {
        (v.row, v.col)
    }
}

/// A rectangular area: top-left offset plus size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner
    pub offset: Vector2D,
    /// Height (`row`) and width (`col`)
    pub size: Vector2D,
}

impl Rect {
    /// Create a rect from an offset and a size
    pub const fn new(offset: Vector2D, size: Vector2D) -> Self {
        Self { offset, size }
    }

    /// Create a rect from top-left coordinates and dimensions
    pub const fn from_dimensions(row: u16, col: u16, height: u16, width: u16) -> Self {
        Self::new(Vector2D::new(row, col), Vector2D::new(height, width))
    }

    /// Create a rect of the given size anchored at the origin
    pub const fn sized(height: u16, width: u16) -> Self {
        Self::from_dimensions(0, 0, height, width)
    }

    pub const fn height(&self) -> u16 {
        self.size.row
    }

    pub const fn width(&self) -> u16 {
        self.size.col
    }

    /// True when the rect covers no cells
    pub const fn is_empty(&self) -> bool {
        self.size.row == 0 || self.size.col == 0
    }

    /// Split into `(offset, size)`
    pub const fn into_parts(self) -> (Vector2D, Vector2D) {
        (self.offset, self.size)
    }
}

impl From<Rect> for (Vector2D, Vector2D) {
    fn from(rect: Rect) -> Self {
        rect.into_parts()
    }
}

impl From<ratatui::layout::Rect> for Rect {
    fn from(r: ratatui::layout::Rect) -> Self {
        Self::from_dimensions(r.y, r.x, r.height, r.width)
    }
}

impl From<Rect> for ratatui::layout::Rect {
    fn from(r: Rect) -> Self {
        ratatui::layout::Rect::new(r.offset.col, r.offset.row, r.size.col, r.size.row)
    }
}
