//! ANSI colour helpers for terminal output.

use crate::attendance::AttendanceStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Colour used for a status badge.
pub fn colour_for_status(status: AttendanceStatus) -> Colour {
    match status {
        AttendanceStatus::Present => Colour::Green,
        AttendanceStatus::Late => Colour::Red,
    }
}

/// The status word painted in its badge colour.
pub fn paint_status(status: AttendanceStatus) -> String {
    colour_for_status(status).bold().paint(status.as_str()).to_string()
}

/// Grey placeholder for an empty cell.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
