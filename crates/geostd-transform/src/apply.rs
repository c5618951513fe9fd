//! Mapping application: rewriting the identifier column.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use crate::data_utils::cell_to_string;
use crate::error::{ConvertError, Result};

/// Mapping entries in application order: longest identifier first, ties
/// broken lexicographically.
///
/// Longest-first keeps a short identifier from rewriting the inside of a
/// longer one that contains it ("Korea" inside "South Korea").
fn ordered_entries(mapping: &BTreeMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = mapping
        .iter()
        .map(|(old, new)| (old.as_str(), new.as_str()))
        .collect();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Rewrite every cell of `column_name`, replacing each mapped identifier's
/// occurrences with its target value.
///
/// Returns a rewritten copy; the input is never mutated. Substitution is
/// substring-level, so separator-joined identifiers are replaced
/// independently and the separators survive. Null cells stay null; the
/// rewritten column is always a string column. Empty identifiers resolve
/// in the mapping but are never applied as substring replacements.
pub fn apply_mapping(
    data: &DataFrame,
    column_name: &str,
    mapping: &BTreeMap<String, String>,
) -> Result<DataFrame> {
    let column = data
        .column(column_name)
        .map_err(|_| ConvertError::ColumnNotFound {
            column: column_name.to_string(),
        })?;

    let entries = ordered_entries(mapping);

    let mut values: Vec<Option<String>> = Vec::with_capacity(data.height());
    for idx in 0..data.height() {
        let cell = cell_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        values.push(cell.map(|cell| {
            let mut rewritten = cell;
            for (old, new) in &entries {
                if !old.is_empty() {
                    rewritten = rewritten.replace(old, new);
                }
            }
            rewritten
        }));
    }

    let mut rewritten = data.clone();
    rewritten.with_column(Series::new(column_name.into(), values))?;
    Ok(rewritten)
}
