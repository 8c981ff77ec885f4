//! Number formatting for table cells.

use crate::utils::config::OUTPUT_DECIMALS;

/// Round to `places` decimals
///
/// Rounds the exact binary value, so `1.005` (stored as 1.00499...) becomes
/// `1.0`. An exact tie goes to the even digit.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Format a normalized value for the output table
///
/// The value is rounded to two decimals and printed in its shortest
/// round-trip form with at least one fractional digit (`150.0`, `12.35`).
/// Non-finite values print as `nan`, `inf` and `-inf`; exponents carry a
/// sign and at least two digits (`1e+16`).
pub fn format_value(value: f64) -> String {
    let rounded = round_to(value, OUTPUT_DECIMALS);

    if rounded.is_nan() {
        return "nan".to_string();
    }
    if rounded.is_infinite() {
        let text = if rounded > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let text = format!("{:?}", rounded);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.strip_prefix('-') {
            Some(digits) => format!("{}e-{:0>2}", mantissa, digits),
            None => format!("{}e+{:0>2}", mantissa, exponent),
        },
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_fixtures() {
        assert_eq!(format_value(12345.678), "12345.68");
        assert_eq!(format_value(12345.004), "12345.0");
        assert_eq!(format_value(150.0), "150.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn test_binary_representation_decides() {
        // Both literals sit just below the half-way point in binary
        assert_eq!(format_value(1.005), "1.0");
        assert_eq!(format_value(2.675), "2.67");
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // 0.125 and 0.375 are exactly representable halves
        assert_eq!(format_value(0.125), "0.12");
        assert_eq!(format_value(0.375), "0.38");
        assert_eq!(format_value(-0.125), "-0.12");
        // 0.005 is stored slightly above the half-way point
        assert_eq!(format_value(0.005), "0.01");
        assert_eq!(format_value(123456789012.345), "123456789012.35");
    }

    #[test]
    fn test_large_and_non_finite_values() {
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(2.5e17), "2.5e+17");
        assert_eq!(format_value(f64::NAN), "nan");
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(-7.456, 1), -7.5);
        assert_eq!(round_to(99.999, 2), 100.0);
    }
}
