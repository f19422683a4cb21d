//! Scalar coercion for raw location fields.
//!
//! Location files come from many exposure systems, so numbers may carry
//! surrounding whitespace or be written as integral floats (`"3.0"`).
//! Each helper returns `None` instead of an error; callers decide whether a
//! missing value is fatal.

/// Largest magnitude at which every integer has an exact `f64` form (2^53).
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// Parse an integer, accepting integral floats such as `"12.0"` or `"1E+03"`.
///
/// Plain integers use the full `i64` range. Float forms are only accepted
/// within ±2^53, where the decimal text maps to exactly one integer; beyond
/// that an id could silently become its neighbour.
pub fn to_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }

    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT_FLOAT_INT {
        Some(v as i64)
    } else {
        None
    }
}

/// Parse a real number.
///
/// `"nan"` and `"inf"` parse successfully; range checks reject them later.
pub fn to_float(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Trim a text field.
pub fn to_text(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("42"), Some(42));
        assert_eq!(to_int("  -7 "), Some(-7));
        assert_eq!(to_int("3.0"), Some(3));
        assert_eq!(to_int("3.5"), None);
        assert_eq!(to_int("abc"), None);
        assert_eq!(to_int(""), None);
        assert_eq!(to_int("nan"), None);
    }

    #[test]
    fn test_to_int_range_limits() {
        assert_eq!(to_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(to_int("-9223372036854775808"), Some(i64::MIN));
        // 2^63 does not fit and must not saturate to i64::MAX
        assert_eq!(to_int("9223372036854775808"), None);
        assert_eq!(to_int("9223372036854775808.0"), None);
        assert_eq!(to_int("9.3e18"), None);
        assert_eq!(to_int("inf"), None);
    }

    #[test]
    fn test_to_int_float_forms_limited_to_exact_range() {
        assert_eq!(to_int("9007199254740991.0"), Some(9_007_199_254_740_991));
        assert_eq!(to_int("-9007199254740991.0"), Some(-9_007_199_254_740_991));
        // 2^53 + 1 rounds to 2^53 as a float
        assert_eq!(to_int("9007199254740993.0"), None);
    }

    #[test]
    fn test_to_int_exponent_forms() {
        assert_eq!(to_int("1e3"), Some(1000));
        assert_eq!(to_int("1E+03"), Some(1000));
        assert_eq!(to_int("-2.5e1"), Some(-25));
        assert_eq!(to_int("1e-3"), None);
        assert_eq!(to_int("1.5e0"), None);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float("10.25"), Some(10.25));
        assert_eq!(to_float(" -0.5 "), Some(-0.5));
        assert_eq!(to_float("1e2"), Some(100.0));
        assert_eq!(to_float("north"), None);
        assert_eq!(to_float("   "), None);
        assert!(to_float("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text("  CR/LFINF  "), "CR/LFINF");
        assert_eq!(to_text(""), "");
    }
}
