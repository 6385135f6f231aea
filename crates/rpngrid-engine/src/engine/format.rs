/// Magnitude from which every `f64` is already an integer (2^52).
const INTEGRAL_FROM: f64 = 4_503_599_627_370_496.0;

/// Format a number for output: at most one fractional digit, no trailing zero.
///
/// Digits come from the shortest representation of the rounded value, so
/// `1e23` prints as `100000000000000000000000` and never in exponent form.
pub fn format_number(n: f64) -> String {
    let rounded = round_for_output(n);
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Round to one fractional digit, using the exact binary value for ties.
///
/// This is also the value dependents read, so they see what is printed.
pub(crate) fn round_for_output(n: f64) -> f64 {
    if !n.is_finite() || n.abs() >= INTEGRAL_FROM {
        return n;
    }
    format!("{:.1}", n).parse().unwrap_or(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_one_fractional_digit() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3");
        assert_eq!(format_number(2.0 / 3.0), "0.7");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-0.75 + 0.001), "-0.7");
    }

    #[test]
    fn test_format_trims_rounded_zero() {
        assert_eq!(format_number(3.96), "4");
        assert_eq!(format_number(-0.04), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_large_values_use_shortest_digits() {
        assert_eq!(format_number(1e23), "100000000000000000000000");
        assert_eq!(format_number(-1e23), "-100000000000000000000000");
        assert_eq!(format_number(123456789012.5), "123456789012.5");
    }

    #[test]
    fn test_round_for_output_matches_display() {
        let rounded = round_for_output(10.0 / 3.0);
        assert_eq!(rounded, 3.3);
        assert_eq!(format_number(rounded), "3.3");
        assert_eq!(round_for_output(1e23), 1e23);
    }
}
