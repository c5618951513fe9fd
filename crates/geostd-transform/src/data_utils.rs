//! Cell value extraction for identifier columns.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its string form, `None` for nulls.
///
/// Null cells must stay distinct from empty strings: a null contributes no
/// identifier and survives conversion as a null, while an empty string is
/// a (degenerate) identifier in its own right.
pub fn cell_to_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => Some(format_numeric(f64::from(v))),
        AnyValue::Float64(v) => Some(format_numeric(v)),
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Boolean(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Formats a floating-point number without trailing zeros.
///
/// A numeric code column read as floats must yield "250", not "250.0",
/// so it can match the reference table's string codes.
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_none() {
        assert_eq!(cell_to_string(AnyValue::Null), None);
    }

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(cell_to_string(AnyValue::String("France")), Some("France".to_string()));
        assert_eq!(cell_to_string(AnyValue::String("")), Some(String::new()));
    }

    #[test]
    fn test_integers() {
        assert_eq!(cell_to_string(AnyValue::Int32(250)), Some("250".to_string()));
        assert_eq!(cell_to_string(AnyValue::UInt64(840)), Some("840".to_string()));
    }

    #[test]
    fn test_floats_drop_trailing_zeros() {
        assert_eq!(cell_to_string(AnyValue::Float64(250.0)), Some("250".to_string()));
        assert_eq!(cell_to_string(AnyValue::Float64(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_to_string(AnyValue::Float64(0.0)), Some("0".to_string()));
    }
}
