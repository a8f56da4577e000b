//! Output formatting for converted values.

/// Format a number with up to `max_decimals` fractional digits, trimming
/// trailing zeros (and a trailing dot) without scientific notation.
///
/// `format_value(62.1371192, 6)` is `"62.137119"`, `format_value(32.0, 6)`
/// is `"32"`.
pub fn format_value(value: f64, max_decimals: usize) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".into() } else { "-∞".into() };
    }
    let s = format!("{:.*}", max_decimals, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        // "-0" after trimming means the value rounded to zero
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Default display formatting used by the CLI: six decimals, trimmed.
pub fn format_default(value: f64) -> String {
    format_value(value, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_value(32.0, 6), "32");
        assert_eq!(format_value(12.5, 6), "12.5");
        assert_eq!(format_value(0.001, 6), "0.001");
    }

    #[test]
    fn keeps_significant_digits() {
        assert_eq!(format_value(62.137119, 6), "62.137119");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_value(f64::NAN, 6), "");
        assert_eq!(format_value(f64::INFINITY, 6), "∞");
    }

    #[test]
    fn negative_zero_rounds_to_zero() {
        assert_eq!(format_value(-0.0000001, 6), "0");
    }
}
