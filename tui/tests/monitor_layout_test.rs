//! Monitor Layout Tests
//!
//! Render the Monitor into buffers of different sizes and check which
//! elements made it onto the screen.

mod common;

use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as TuiRect;

use spnoiser_tui::compositor::{Region, ScreenElement};
use spnoiser_tui::error::UiError;
use spnoiser_tui::geometry::Rect;
use spnoiser_tui::widgets::Monitor;

use common::rows;

fn render(height: u16, width: u16, monitor: &Monitor<'_>) -> Vec<String> {
    let mut buf = Buffer::empty(TuiRect::new(0, 0, width, height));
    Region::full(&mut buf).draw_sub(monitor).unwrap();
    rows(&buf)
}

#[test]
fn test_single_row_shows_only_exit_hint() {
    assert_eq!(
        render(1, 20, &Monitor::new("beep", Some(30))),
        vec!["Press ESC to stop   "]
    );
}

#[test]
fn test_two_rows_add_countdown() {
    assert_eq!(
        render(2, 30, &Monitor::new("beep", Some(30))),
        vec!["Noising time remaining: 30s   ", "Press ESC to stop             "]
    );
}

#[test]
fn test_three_rows_add_unbordered_band() {
    // unbordered threshold is 4 + 4 = 8
    assert_eq!(
        render(3, 12, &Monitor::new("beep", Some(90))),
        vec!["    beep    ", "Noising time", "Press ESC to"]
    );
}

#[test]
fn test_narrow_band_uses_compressed_filler() {
    assert_eq!(
        render(4, 7, &Monitor::new("beep", None)),
        vec!["beep be", "beep be", "       ", "Press E"]
    );
}

#[test]
fn test_five_rows_add_border() {
    // bordered threshold is 4 + 4 + 2 = 10, so width 9 stays compressed
    assert_eq!(
        render(5, 9, &Monitor::new("beep", Some(5))),
        vec![
            "+-------+",
            "|beep be|",
            "+-------+",
            "Noising t",
            "Press ESC",
        ]
    );
}

#[test]
fn test_bordered_expanded_at_threshold() {
    assert_eq!(
        render(5, 10, &Monitor::new("beep", None))[1],
        "|    beep|"
    );
}

#[test]
fn test_long_countdown_formats() {
    let frame = render(2, 45, &Monitor::new("x", Some(90_000)));
    assert_eq!(frame[0].trim_end(), "Noising time remaining: 1 days and 01:00");
}

#[test]
fn test_zero_sized_area_draws_nothing() {
    let mut buf = Buffer::empty(TuiRect::new(0, 0, 4, 4));
    let mut region = Region::new(&mut buf, Rect::sized(4, 0));
    Monitor::new("beep", Some(1)).draw(&mut region).unwrap();
    assert_eq!(rows(&buf), vec!["    "; 4]);
}

#[test]
fn test_zero_remaining_is_rejected() {
    let mut buf = Buffer::empty(TuiRect::new(0, 0, 20, 3));
    let err = Region::full(&mut buf)
        .draw_sub(&Monitor::new("beep", Some(0)))
        .unwrap_err();
    assert!(matches!(err, UiError::InvalidArgument(_)));
}

#[test]
fn test_monitor_inside_offset_region() {
    let mut buf = Buffer::empty(TuiRect::new(0, 0, 12, 3));
    Region::new(&mut buf, Rect::from_dimensions(1, 2, 2, 10))
        .draw_sub(&Monitor::new("beep", None))
        .unwrap();
    assert_eq!(
        rows(&buf),
        vec!["            ", "            ", "  Press ESC "]
    );
}
