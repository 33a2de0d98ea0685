//! Amount Parsing
//!
//! Form input is free text. Anything that does not start with a number
//! becomes zero instead of an error.

/// Parse the leading number of `input`, falling back to `0.0`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"4.5 coffee"` parses as `4.5`. Empty, non-numeric and non-finite
/// input all yield `0.0`.
pub fn parse_amount(input: &str) -> f64 {
    let prefix = numeric_prefix(input.trim_start());
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

/// Longest prefix of `s` shaped like `[sign] digits [. digits] [e [sign] digits]`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("250"), 250.0);
        assert_eq!(parse_amount("4.5"), 4.5);
        assert_eq!(parse_amount("-12.25"), -12.25);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
    }

    #[test]
    fn test_blank_and_garbage_become_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("$5"), 0.0);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert_eq!(parse_amount("  4.5 coffee"), 4.5);
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("1.2.3"), 1.2);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2.5E-1"), 0.25);
        // Dangling exponent is ignored
        assert_eq!(parse_amount("7e"), 7.0);
        assert_eq!(parse_amount("7e+"), 7.0);
    }

    #[test]
    fn test_overflow_and_negative_zero() {
        assert_eq!(parse_amount("1e400"), 0.0);
        let zero = parse_amount("-0");
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }
}
