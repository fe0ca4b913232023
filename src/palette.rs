//! Color palette and semantic roles for rendered log lines.
//!
//! Every colored span in the crate goes through this module so colors stay
//! consistent between levels and metadata. [`paint`] defers to `colored`'s
//! terminal detection; [`forced`] always emits escape codes and never
//! touches `colored`'s process-wide override.

use colored::{Color, ColoredString, Colorize};

use crate::level::Level;

pub const BLUE_RGB: (u8, u8, u8) = (20, 86, 240);
pub const RED_RGB: (u8, u8, u8) = (242, 63, 93);
pub const ORANGE_RGB: (u8, u8, u8) = (255, 99, 58);
pub const MAGENTA_RGB: (u8, u8, u8) = (228, 23, 127);
pub const SLATE_RGB: (u8, u8, u8) = (53, 60, 67);
pub const SILVER_RGB: (u8, u8, u8) = (201, 205, 212);
pub const GREEN_RGB: (u8, u8, u8) = (74, 222, 128);
pub const YELLOW_RGB: (u8, u8, u8) = (250, 204, 21);

pub const TRACE_RGB: (u8, u8, u8) = SLATE_RGB;
pub const DEBUG_RGB: (u8, u8, u8) = SILVER_RGB;
pub const INFO_RGB: (u8, u8, u8) = GREEN_RGB;
pub const WARNING_RGB: (u8, u8, u8) = YELLOW_RGB;
pub const ERROR_RGB: (u8, u8, u8) = RED_RGB;
pub const ALERT_RGB: (u8, u8, u8) = MAGENTA_RGB;

pub const TIMESTAMP_RGB: (u8, u8, u8) = SILVER_RGB;
pub const LOCATION_RGB: (u8, u8, u8) = BLUE_RGB;
pub const FIELD_KEY_RGB: (u8, u8, u8) = ORANGE_RGB;

pub fn level_rgb(level: Level) -> (u8, u8, u8) {
    match level {
        Level::Trace => TRACE_RGB,
        Level::Debug => DEBUG_RGB,
        Level::Info | Level::Message => INFO_RGB,
        Level::Warning => WARNING_RGB,
        Level::Error => ERROR_RGB,
        Level::Alert => ALERT_RGB,
    }
}

pub fn label_is_bold(level: Level) -> bool {
    level >= Level::Error
}

pub fn paint(text: &str, rgb: (u8, u8, u8), bold: bool) -> ColoredString {
    let (r, g, b) = rgb;
    let painted = text.truecolor(r, g, b);
    if bold { painted.bold() } else { painted }
}

/// Wraps `text` in true-color escape codes regardless of the terminal.
pub fn forced(text: &str, rgb: (u8, u8, u8), bold: bool) -> String {
    let (r, g, b) = rgb;
    let fg = Color::TrueColor { r, g, b }.to_fg_str();
    let bold = if bold { "1;" } else { "" };
    format!("\x1b[{bold}{fg}m{text}\x1b[0m")
}
