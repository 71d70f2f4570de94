// thermotrack_core/src/parsing/line.rs

//! Line-level helpers shared by both log grammars.

use std::str::FromStr;
use thiserror::Error;

// --- Section markers ---
pub const HEADER_MARKER: &str = "header:";
pub const POSITION_MARKER: &str = "position:";
pub const ORIENTATION_MARKER: &str = "orientation:";

/// A recognised key whose value could not be coerced to the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{key}` expects {expected}, got {value:?}")]
pub struct FieldError {
    pub key: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Returns the trimmed value of `line` if it starts with `key` (which includes
/// its trailing colon). Everything after the key is kept verbatim, so
/// `frame_id: a:b` yields `a:b`.
pub fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key).map(str::trim)
}

/// Coerces a raw value, tagging failures with the key for diagnostics.
pub fn coerce<T: FromStr>(key: &'static str, raw: &str, expected: &'static str) -> Result<T, FieldError> {
    raw.parse::<T>().map_err(|_| FieldError {
        key,
        value: raw.to_string(),
        expected,
    })
}

/// Integer field (`seq`, `secs`, `nsecs`).
pub fn coerce_int(key: &'static str, raw: &str) -> Result<i64, FieldError> {
    coerce(key, raw, "an integer")
}

/// Float field (coordinates, quaternion parts, temperature, variance).
pub fn coerce_float(key: &'static str, raw: &str) -> Result<f64, FieldError> {
    coerce(key, raw, "a number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_prefix_match() {
        assert_eq!(field_value("x: 1.5", "x:"), Some("1.5"));
        assert_eq!(field_value("x:1.5   ", "x:"), Some("1.5"));
        assert_eq!(field_value("y: 1.5", "x:"), None);
        // Prefix, not word, matching.
        assert_eq!(field_value("secs: 4", "nsecs:"), None);
        assert_eq!(field_value("nsecs: 4", "secs:"), None);
    }

    #[test]
    fn test_field_value_keeps_inner_colons() {
        assert_eq!(field_value("frame_id: odom:base", "frame_id:"), Some("odom:base"));
    }

    #[test]
    fn test_coerce_reports_key_and_value() {
        let err = coerce_int("seq", "twelve").unwrap_err();
        assert_eq!(err.key, "seq");
        assert_eq!(err.value, "twelve");
        assert!(err.to_string().contains("an integer"));
    }

    #[test]
    fn test_integer_fields_reject_decimals() {
        assert!(coerce_int("secs", "1.0").is_err());
        assert_eq!(coerce_int("secs", "-3"), Ok(-3));
        assert_eq!(coerce_float("x", "-3"), Ok(-3.0));
    }
}
