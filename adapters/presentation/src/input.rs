//! Sanitizers for free-form text typed into the display surface.
//!
//! Malformed text never reaches the world as an error; each field has a
//! fallback value instead.

use std::time::Duration;

/// Parses a matrix or delta cell; anything that is not a whole integer is `0`.
///
/// Negative values are kept. They are inert for traversal purposes.
#[must_use]
pub fn parse_cell(text: &str) -> i32 {
    text.trim().parse().unwrap_or(0)
}

/// Parses the level scalar; non-numeric text and `0` both fall back to `1`.
#[must_use]
pub fn parse_scalar(text: &str) -> i32 {
    match parse_cell(text) {
        0 => 1,
        value => value,
    }
}

/// Parses an operand scalar; empty text is `1` and other malformed text is `0`.
#[must_use]
pub fn parse_operand_scalar(text: &str) -> i32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        1
    } else {
        parse_cell(trimmed)
    }
}

/// Formats elapsed running time as `mm:ss`, truncating partial seconds.
#[must_use]
pub fn format_timer(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_timer, parse_cell, parse_operand_scalar, parse_scalar};

    #[test]
    fn cells_fall_back_to_zero() {
        assert_eq!(parse_cell(" 7 "), 7);
        assert_eq!(parse_cell("-3"), -3);
        assert_eq!(parse_cell("12abc"), 0);
        assert_eq!(parse_cell(""), 0);
    }

    #[test]
    fn scalars_never_become_zero() {
        assert_eq!(parse_scalar("3"), 3);
        assert_eq!(parse_scalar("0"), 1);
        assert_eq!(parse_scalar("x"), 1);
        assert_eq!(parse_scalar("-2"), -2);
    }

    #[test]
    fn operand_scalars_distinguish_empty_from_malformed() {
        assert_eq!(parse_operand_scalar(""), 1);
        assert_eq!(parse_operand_scalar("  "), 1);
        assert_eq!(parse_operand_scalar("?"), 0);
        assert_eq!(parse_operand_scalar("4"), 4);
    }

    #[test]
    fn timer_pads_minutes_and_seconds() {
        assert_eq!(format_timer(Duration::ZERO), "00:00");
        assert_eq!(format_timer(Duration::from_millis(65_999)), "01:05");
        assert_eq!(format_timer(Duration::from_secs(3_600)), "60:00");
    }
}
