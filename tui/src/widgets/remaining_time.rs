//! RemainingTime Element
//!
//! Countdown label on the second-to-last row of its area.

use crate::compositor::{Region, ScreenElement};
use crate::error::UiError;
use crate::theme;

const SECONDS_DAY: u64 = 86_400;
const SECONDS_HOUR: u64 = 3_600;
const SECONDS_MINUTE: u64 = 60;

/// "Noising time remaining: ..." label
#[derive(Debug)]
pub struct RemainingTime {
    seconds: u64,
}

impl RemainingTime {
    /// Only valid while time remains; `seconds <= 0` is rejected
    pub fn new(seconds: i64) -> Result<Self, UiError> {
        if seconds <= 0 {
            return Err(UiError::InvalidArgument(format!(
                "remaining seconds must be greater than zero, got {seconds}"
            )));
        }
        Ok(Self {
            seconds: seconds as u64,
        })
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn label(&self) -> String {
        format!("Noising time remaining: {}", format_remaining(self.seconds))
    }
}

/// Human-readable countdown.
///
/// More than a day shows `"<d> days and HH:MM"`, more than a minute shows
/// `"HH:MM"` (hours are not wrapped), anything else shows `"<s>s"`.
pub fn format_remaining(seconds: u64) -> String {
    if seconds > SECONDS_DAY {
        let days = seconds / SECONDS_DAY;
        let rest = seconds % SECONDS_DAY;
        let hh = rest / SECONDS_HOUR;
        let mm = (rest % SECONDS_HOUR) / SECONDS_MINUTE;
        format!("{days} days and {hh:02}:{mm:02}")
    } else if seconds > SECONDS_MINUTE {
        let hh = seconds / SECONDS_HOUR;
        let mm = (seconds % SECONDS_HOUR) / SECONDS_MINUTE;
        format!("{hh:02}:{mm:02}")
    } else {
        format!("{seconds}s")
    }
}

impl ScreenElement for RemainingTime {
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError> {
        let row = region.size().row.saturating_sub(2);
        region.draw_str(row, 0, &self.label(), theme::countdown())
    }
}
