//! ExitHint Element

use crate::compositor::{Region, ScreenElement};
use crate::error::UiError;
use crate::theme;

pub const EXIT_HINT: &str = "Press ESC to stop";

/// Static hint on the last row of its area
#[derive(Debug, Default)]
pub struct ExitHint;

impl ScreenElement for ExitHint {
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError> {
        let row = region.size().row.saturating_sub(1);
        region.draw_str(row, 0, EXIT_HINT, theme::hint())
    }
}
