//! Decimal numeral parsing and formatting.

use std::sync::LazyLock;

use regex::Regex;

/// Optionally signed decimal with optional fraction and exponent.
/// Surrounding whitespace is accepted; `inf` and `nan` are not numerals.
static DECIMAL_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$")
        .expect("decimal numeral regex")
});

/// Whether `value` is a decimal numeral.
pub fn is_numeric(value: &str) -> bool {
    DECIMAL_NUMERAL.is_match(value)
}

/// Parses a decimal numeral, returning None for anything else.
pub fn parse_numeric(value: &str) -> Option<f64> {
    if !is_numeric(value) {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_numbers() {
        assert_eq!(parse_numeric("123"), Some(123.0));
        assert_eq!(parse_numeric("-456"), Some(-456.0));
        assert_eq!(parse_numeric("+0.5"), Some(0.5));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("010.1"), Some(10.1));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_numeric("  123  "), Some(123.0));
        assert_eq!(parse_numeric(" 50.5"), Some(50.5));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1.23e5"), Some(123000.0));
        assert_eq!(parse_numeric("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_not_numerals() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("  "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("12.34.56"), None);
        assert_eq!(parse_numeric("1,234"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("."), None);
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(10.50), "10.5");
        assert_eq!(format_numeric(0.1), "0.1");
        assert_eq!(format_numeric(120.0), "120");
    }
}
