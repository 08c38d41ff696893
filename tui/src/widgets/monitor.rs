//! Monitor
//!
//! The composition root. Decides from the available height and width which
//! elements fit this frame:
//!
//! | height | drawn                                             |
//! |--------|---------------------------------------------------|
//! | >= 1   | exit hint (last row)                              |
//! | >= 2   | + countdown (second-to-last row), when bounded    |
//! | >= 3   | + noise band over rows `[0, height - 2)`          |
//! | >= 5   | + border around the noise band                    |

use crate::compositor::{Region, ScreenElement};
use crate::error::UiError;
use crate::geometry::Rect;

use super::{BorderBox, Density, ExitHint, Filler, RemainingTime};

/// Full-screen layout for one frame
#[derive(Debug)]
pub struct Monitor<'a> {
    noise: &'a str,
    remaining_seconds: Option<u64>,
}

/// Layout decisions derived from an area's size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonitorLayout {
    /// Noise band height and filler choice, when the band fits
    pub band: Option<(u16, Density, bool)>,
    pub countdown: bool,
    pub exit_hint: bool,
}

impl<'a> Monitor<'a> {
    /// `remaining_seconds` is `None` when the session is unbounded
    pub fn new(noise: &'a str, remaining_seconds: Option<u64>) -> Self {
        Self {
            noise,
            remaining_seconds,
        }
    }

    /// Minimum width for the expanded filler
    pub fn expanded_threshold(noise: &str, bordered: bool) -> usize {
        noise.chars().count() + Density::Expanded.overhead() + if bordered { 2 } else { 0 }
    }

    /// Work out what fits in a `height` x `width` area
    pub fn layout(&self, height: u16, width: u16) -> MonitorLayout {
        let band = (height >= 3).then(|| {
            let bordered = height >= 5;
            let density = if width as usize >= Self::expanded_threshold(self.noise, bordered) {
                Density::Expanded
            } else {
                Density::Compressed
            };
            (height - 2, density, bordered)
        });

        MonitorLayout {
            band,
            countdown: height >= 2 && self.remaining_seconds.is_some(),
            exit_hint: height >= 1,
        }
    }
}

impl ScreenElement for Monitor<'_> {
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError> {
        let size = region.size();
        let layout = self.layout(size.row, size.col);

        if let Some((band_height, density, bordered)) = layout.band {
            let band = Rect::sized(band_height, size.col);
            let filler = Filler::new(self.noise, density);
            if bordered {
                region.draw_sub_in(band, &BorderBox::new(filler))?;
            } else {
                region.draw_sub_in(band, &filler)?;
            }
        }

        if layout.countdown {
            if let Some(seconds) = self.remaining_seconds {
                let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
                region.draw_sub(&RemainingTime::new(seconds)?)?;
            }
        }

        if layout.exit_hint {
            region.draw_sub(&ExitHint)?;
        }

        Ok(())
    }
}
