//! Formatting utilities used for CLI and export outputs.

use chrono::Duration;
use unicode_width::UnicodeWidthStr;

/// Render a duration as whole hours/minutes, truncating (never rounding)
/// at each unit boundary. `with_seconds` adds the seconds field, used by
/// the live open-shift view.
///
/// Negative durations cannot occur (shift durations are clamped), but a
/// stray negative is rendered as zero rather than with a sign.
pub fn format_duration(d: Duration, with_seconds: bool) -> String {
    let total = d.num_seconds().max(0);

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if with_seconds {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}
