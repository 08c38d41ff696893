//! Theme and Colors
//!
//! Styles applied to each screen element. Styling never changes the text
//! written into a cell, only how it is shown.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Noise text - loud yellow
pub const NOISE_YELLOW: Color = Color::Rgb(255, 223, 64);

/// Border frame
pub const BORDER_RED: Color = Color::Rgb(255, 80, 80);

/// Countdown text
pub const COUNTDOWN_CYAN: Color = Color::Rgb(120, 220, 255);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

// ============================================================================
// Element Styles
// ============================================================================

/// Filler rows
pub fn noise() -> Style {
    Style::default().fg(NOISE_YELLOW).add_modifier(Modifier::BOLD)
}

/// Border glyphs
pub fn border() -> Style {
    Style::default().fg(BORDER_RED)
}

/// Remaining-time label
pub fn countdown() -> Style {
    Style::default().fg(COUNTDOWN_CYAN)
}

/// Exit hint
pub fn hint() -> Style {
    Style::default().fg(DIM_GRAY)
}
