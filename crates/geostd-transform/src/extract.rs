//! Identifier extraction from a DataFrame column.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column};

use crate::data_utils::cell_to_string;

/// Split one cell's string form into identifier tokens.
///
/// With no separator, or a separator absent from the cell, the whole
/// trimmed cell is one identifier. With the separator present, the cell is
/// split on every occurrence and each piece trimmed; empty pieces from
/// degenerate splits are kept.
pub fn split_identifiers(cell: &str, separator: Option<&str>) -> Vec<String> {
    match separator {
        Some(sep) if !sep.is_empty() && cell.contains(sep) => cell
            .split(sep)
            .map(|piece| piece.trim().to_string())
            .collect(),
        _ => vec![cell.trim().to_string()],
    }
}

/// Collect the distinct identifiers appearing anywhere in a column.
///
/// Null cells contribute nothing. The `BTreeSet` collapses duplicates and
/// fixes a deterministic iteration order for downstream resolution.
pub fn extract_identifiers(column: &Column, separator: Option<&str>) -> BTreeSet<String> {
    let mut identifiers = BTreeSet::new();
    for idx in 0..column.len() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let Some(cell) = cell_to_string(value) else {
            continue;
        };
        identifiers.extend(split_identifiers(&cell, separator));
    }
    identifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_separator_keeps_whole_cell() {
        assert_eq!(
            split_identifiers("  United States of America ", None),
            vec!["United States of America".to_string()]
        );
    }

    #[test]
    fn test_separator_splits_and_trims() {
        assert_eq!(
            split_identifiers("France; Germany ;Italy", Some(";")),
            vec!["France".to_string(), "Germany".to_string(), "Italy".to_string()]
        );
    }

    #[test]
    fn test_absent_separator_keeps_whole_cell() {
        assert_eq!(
            split_identifiers("France", Some(";")),
            vec!["France".to_string()]
        );
    }

    #[test]
    fn test_degenerate_splits_keep_empty_pieces() {
        assert_eq!(
            split_identifiers("France;;Germany;", Some(";")),
            vec![
                "France".to_string(),
                String::new(),
                "Germany".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn test_extract_skips_nulls_and_dedups() {
        let column = Column::new(
            "country".into(),
            vec![
                Some("France;Germany"),
                None,
                Some("Germany"),
                Some("  France "),
            ],
        );
        let ids = extract_identifiers(&column, Some(";"));
        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            vec!["France".to_string(), "Germany".to_string()]
        );
    }

    #[test]
    fn test_extract_casts_numeric_cells() {
        let column = Column::new("code".into(), vec![Some(250i64), None, Some(276)]);
        let ids = extract_identifiers(&column, None);
        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            vec!["250".to_string(), "276".to_string()]
        );
    }
}
