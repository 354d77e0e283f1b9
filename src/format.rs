//! Display formatting for click values.
//!
//! Every number on the card goes through [`format_clicks`]: fixed decimal
//! precision, then the negative-zero rewrite. Rounding a small negative
//! value can otherwise leave a `-0` artifact on the card.

/// Format a click value at a fixed number of decimals.
pub fn format_clicks(value: f64, decimals: usize) -> String {
    fix_sign(format!("{value:.decimals$}"))
}

/// Rewrite a textual negative zero to its positive-zero form.
///
/// Handles every decimal-separator form a formatting layer may produce:
/// `-0`, `-0.0`, `-0,0` become `0`, `0.0`, `0,0`.
fn fix_sign(number: String) -> String {
    let Some(rest) = number.strip_prefix('-') else {
        return number;
    };
    let mut any_digit = false;
    for c in rest.chars() {
        match c {
            '0' => any_digit = true,
            '.' | ',' => {}
            _ => return number,
        }
    }
    if any_digit {
        rest.to_string()
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_rounding() {
        assert_eq!(format_clicks(34.7, 0), "35");
        assert_eq!(format_clicks(-12.8, 0), "-13");
        assert_eq!(format_clicks(500.0, 0), "500");
    }

    #[test]
    fn test_one_decimal_rounding() {
        assert_eq!(format_clicks(1.3, 1), "1.3");
        assert_eq!(format_clicks(-2.34, 1), "-2.3");
    }

    #[test]
    fn test_negative_zero_normalized() {
        // -0.04 rounds to -0.0 at one decimal, which must render as 0.0
        assert_eq!(format_clicks(-0.04, 1), "0.0");
        assert_eq!(format_clicks(-0.4, 0), "0");
        assert_eq!(format_clicks(-0.0, 0), "0");
        assert_eq!(format_clicks(-0.0, 1), "0.0");
    }

    #[test]
    fn test_fix_sign_forms() {
        assert_eq!(fix_sign("-0".to_string()), "0");
        assert_eq!(fix_sign("-0.0".to_string()), "0.0");
        assert_eq!(fix_sign("-0,0".to_string()), "0,0");
        // Genuine negatives are untouched
        assert_eq!(fix_sign("-0.1".to_string()), "-0.1");
        assert_eq!(fix_sign("-10".to_string()), "-10");
        assert_eq!(fix_sign("0.0".to_string()), "0.0");
        // A bare minus is not a number
        assert_eq!(fix_sign("-".to_string()), "-");
    }
}
