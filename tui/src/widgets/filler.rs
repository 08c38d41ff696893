//! Noise Fillers
//!
//! Fill every row of an area with the noise text repeated end to end. Two
//! densities exist: [`Density::Expanded`] pads each repetition with four
//! leading spaces, [`Density::Compressed`] packs them with a single space.

use crate::compositor::{Region, ScreenElement};
use crate::error::UiError;
use crate::theme;

/// Token strategy for a filler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// `"    " + noise`
    Expanded,
    /// `noise + " "`
    Compressed,
}

impl Density {
    /// How many characters the token adds beyond the raw noise text
    pub const fn overhead(self) -> usize {
        match self {
            Density::Expanded => 4,
            Density::Compressed => 1,
        }
    }

    /// The repeating unit for `noise`
    pub fn token(self, noise: &str) -> String {
        match self {
            Density::Expanded => format!("    {noise}"),
            Density::Compressed => format!("{noise} "),
        }
    }
}

/// Build one filler line of exactly `width` characters from `token`
pub fn fill_line(token: &str, width: usize) -> String {
    let token_len = token.chars().count();
    if token_len == 0 {
        return " ".repeat(width);
    }

    let exact = width % token_len == 0;
    let repeats = if exact {
        width / token_len
    } else {
        width / token_len + 1
    };

    let line = token.repeat(repeats);
    if exact {
        line
    } else {
        line.chars().take(width).collect()
    }
}

/// Area filled with repeated noise text
pub struct Filler<'a> {
    noise: &'a str,
    density: Density,
}

impl<'a> Filler<'a> {
    pub fn new(noise: &'a str, density: Density) -> Self {
        Self { noise, density }
    }

    pub fn expanded(noise: &'a str) -> Self {
        Self::new(noise, Density::Expanded)
    }

    pub fn compressed(noise: &'a str) -> Self {
        Self::new(noise, Density::Compressed)
    }

    pub fn density(&self) -> Density {
        self.density
    }
}

impl ScreenElement for Filler<'_> {
    fn draw(&self, region: &mut Region<'_>) -> Result<(), UiError> {
        let size = region.size();
        let line = fill_line(&self.density.token(self.noise), size.col as usize);
        let style = theme::noise();

        for row in 0..size.row {
            region.draw_str(row, 0, &line, style)?;
        }
        Ok(())
    }
}
