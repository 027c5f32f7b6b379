//! Compact numeric formatting for emitted G-code coordinates.
//!
//! The machine's program consumer expects minimal-width numeric
//! tokens: whole numbers without a fractional part, everything else
//! with at most two fractional digits and no trailing zeros.

/// Format a coordinate in compact form.
///
/// Whole values render as integers, fractional values with two digits
/// of precision, trailing zeros and a bare trailing point stripped.
/// Zero (including negative zero) renders as `"0"`.
///
/// ```
/// use plotkit_core::format_coord;
/// assert_eq!(format_coord(0.0), "0");
/// assert_eq!(format_coord(12.0), "12");
/// assert_eq!(format_coord(3.14159), "3.14");
/// assert_eq!(format_coord(10.10), "10.1");
/// ```
pub fn format_coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let mut text = format!("{:.2}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    // -0.004 rounds to "-0.00" and trims to "-0".
    if text == "-0" {
        return "0".to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_coord(0.0), "0");
        assert_eq!(format_coord(-0.0), "0");
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_coord(12.000), "12");
        assert_eq!(format_coord(-7.0), "-7");
        assert_eq!(format_coord(100.0), "100");
    }

    #[test]
    fn test_fractional() {
        assert_eq!(format_coord(0.5), "0.5");
        assert_eq!(format_coord(3.14159), "3.14");
        assert_eq!(format_coord(10.10), "10.1");
        assert_eq!(format_coord(-2.50), "-2.5");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_coord(1.999), "2");
        assert_eq!(format_coord(0.004), "0");
        assert_eq!(format_coord(-0.004), "0");
    }
}
