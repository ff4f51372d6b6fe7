//! Conversions between display text and numbers.

use crate::EngineError;

/// Parses display text into a finite number.
///
/// Non-finite values (`NaN`, `Infinity`) are refused so that a result which
/// overflowed or left the real numbers cannot be fed back into another
/// calculation.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::parse_display;
///
/// assert_eq!(parse_display("1.5"), Ok(1.5));
/// assert_eq!(parse_display("-0."), Ok(-0.0));
/// assert!(parse_display("NaN").is_err());
/// ```
pub fn parse_display(display: &str) -> Result<f64, EngineError> {
    display
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EngineError::Parse(display.to_string()))
}

/// Formats a result for the display.
///
/// Finite values use the shortest text that reads back to the same number,
/// without exponent notation, and lose a trailing `.0`. Negative zero
/// reads as `0`, so it stays a no-op for the sign toggle.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::format_result;
///
/// assert_eq!(format_result(7.0), "7");
/// assert_eq!(format_result(1.5), "1.5");
/// assert_eq!(format_result(f64::NAN), "NaN");
/// ```
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let text = value.to_string();
    match text.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => text,
    }
}
