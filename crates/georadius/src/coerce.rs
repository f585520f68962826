//! Loose numeric coercion for untyped inputs.
//!
//! The calculator itself takes plain `f64`s, but callers sitting on untyped
//! boundaries (CLI arguments, query strings, form fields) often hold loosely
//! formatted text. [`lenient_f64`] mirrors the permissive numeric cast those
//! callers historically relied on: parse the longest leading numeric prefix,
//! and coerce anything unparseable to `0.0` instead of failing.

/// Parse the longest numeric prefix of `input`, coercing junk to `0.0`.
///
/// Leading and trailing whitespace is ignored. Signs, decimal points and
/// exponents are honored as long as they form a valid number:
///
/// ```
/// use georadius::lenient_f64;
///
/// assert_eq!(lenient_f64("50"), 50.0);
/// assert_eq!(lenient_f64("12.5deg"), 12.5);
/// assert_eq!(lenient_f64("north"), 0.0);
/// ```
pub fn lenient_f64(input: &str) -> f64 {
    let trimmed = input.trim();
    // Restricting the scan to numeric characters keeps textual floats like
    // "inf" and "NaN" out, which plain f64 parsing would accept.
    let numeric = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    let end = trimmed.find(|c| !numeric(c)).unwrap_or(trimmed.len());
    let mut prefix = &trimmed[..end];

    while !prefix.is_empty() {
        if let Ok(value) = prefix.parse::<f64>() {
            return value;
        }
        prefix = &prefix[..prefix.len() - 1];
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(lenient_f64("50"), 50.0);
        assert_eq!(lenient_f64("-3.25"), -3.25);
        assert_eq!(lenient_f64(".5"), 0.5);
        assert_eq!(lenient_f64("1e3"), 1000.0);
        assert_eq!(lenient_f64("  39.908692  "), 39.908692);
    }

    #[test]
    fn test_numeric_prefixes() {
        assert_eq!(lenient_f64("12.5deg"), 12.5);
        assert_eq!(lenient_f64("10km"), 10.0);
        assert_eq!(lenient_f64("12.3.4"), 12.3);
        // A dangling exponent marker is dropped, not an error.
        assert_eq!(lenient_f64("1e"), 1.0);
    }

    #[test]
    fn test_junk_coerces_to_zero() {
        assert_eq!(lenient_f64(""), 0.0);
        assert_eq!(lenient_f64("north"), 0.0);
        assert_eq!(lenient_f64("-"), 0.0);
        assert_eq!(lenient_f64("inf"), 0.0);
        assert_eq!(lenient_f64("NaN"), 0.0);
    }
}
