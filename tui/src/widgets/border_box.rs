//! BorderBox Element
//!
//! A one-cell ASCII frame with its content drawn in the interior.

use crate::compositor::{Region, ScreenElement};
use crate::error::UiError;
use crate::geometry::Rect;
use crate::theme;

/// Frame drawn around `content`
pub struct BorderBox<C> {
    content: C,
}

impl<C: ScreenElement> BorderBox<C> {
    /// Wrap `content`, which receives the interior region
    pub fn new(content: C) -> Self {
        Self { content }
    }

    fn draw_frame(region: &mut Region<'_>) -> Result<(), UiError> {
        let (_, size) = region.area().into_parts();
        let (height, width) = (size.row, size.col);
        let style = theme::border();

        let horizontal = if width >= 2 {
            format!("+{}+", "-".repeat(width as usize - 2))
        } else {
            "+".to_string()
        };

        region.draw_str(0, 0, &horizontal, style)?;
        for row in 1..height.saturating_sub(1) {
            region.draw_str(row, 0, "|", style)?;
            region.draw_str(row, width.saturating_sub(1), "|", style)?;
        }
        region.draw_str(height.saturating_sub(1), 0, &horizontal, style)
    }
}

impl<C: ScreenElement> ScreenElement for BorderBox<C> {
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError> {
        // a broken frame never aborts the frame
        if let Err(err) = Self::draw_frame(region) {
            tracing::trace!(error = %err, "border glyphs skipped");
        }

        let size = region.size();
        let (inner_height, inner_width) = (size.row.saturating_sub(2), size.col.saturating_sub(2));
        if inner_height == 0 || inner_width == 0 {
            return Ok(());
        }

        region.draw_sub_in(
            Rect::from_dimensions(1, 1, inner_height, inner_width),
            &self.content,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::from_fn;
    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect as TuiRect;
    use std::cell::Cell;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn draw_box(height: u16, width: u16, content: impl ScreenElement) -> Buffer {
        let mut buf = Buffer::empty(TuiRect::new(0, 0, width, height));
        Region::full(&mut buf)
            .draw_sub(&BorderBox::new(content))
            .unwrap();
        buf
    }

    #[test]
    fn test_frame_glyphs() {
        let buf = draw_box(4, 5, from_fn(|_| Ok(())));
        assert_eq!(rows(&buf), vec!["+---+", "|   |", "|   |", "+---+"]);
    }

    #[test]
    fn test_content_gets_interior() {
        let seen = Cell::new(Rect::default());
        draw_box(
            5,
            7,
            from_fn(|r| {
                seen.set(r.area());
                Ok(())
            }),
        );
        assert_eq!(seen.get(), Rect::from_dimensions(1, 1, 3, 5));
    }

    #[test]
    fn test_content_skipped_without_interior() {
        let called = Cell::new(false);
        let content = from_fn(|_| {
            called.set(true);
            Ok(())
        });
        let buf = draw_box(2, 6, &content);
        assert!(!called.get());
        assert_eq!(rows(&buf), vec!["+----+", "+----+"]);

        draw_box(6, 2, &content);
        assert!(!called.get());
    }

    #[test]
    fn test_single_column_frame() {
        let buf = draw_box(3, 1, from_fn(|_| Ok(())));
        assert_eq!(rows(&buf), vec!["+", "|", "+"]);
    }

    #[test]
    fn test_content_errors_propagate() {
        let mut buf = Buffer::empty(TuiRect::new(0, 0, 5, 5));
        let err = Region::full(&mut buf)
            .draw_sub(&BorderBox::new(from_fn(|_| {
                Err(UiError::InvalidArgument("boom".into()))
            })))
            .unwrap_err();
        assert_eq!(err, UiError::InvalidArgument("boom".into()));
    }
}
