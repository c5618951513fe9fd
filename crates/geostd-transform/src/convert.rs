//! Boundary-facing column conversion.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use geostd_model::{ConvertOptions, ReferenceTable, Unresolved};

use crate::apply::apply_mapping;
use crate::error::{ConvertError, Result};
use crate::extract::extract_identifiers;
use crate::resolve::{resolve, Resolution};

/// Result of converting one identifier column.
#[derive(Debug, Clone)]
pub struct ColumnConversion {
    /// Rewritten copy of the input data.
    pub data: DataFrame,
    /// The conversion mapping that was applied.
    pub mapping: BTreeMap<String, String>,
    /// Identifiers the resolver could not convert.
    pub unresolved: Vec<Unresolved>,
}

/// Convert a column of country identifiers to the target standard.
///
/// Extracts the distinct identifiers from `column_name` (splitting on the
/// configured separator), resolves each against the reference table, and
/// rewrites the column in a copy of `data`. Unresolved identifiers never
/// abort the call; they are handled by the missing policy and reported in
/// the result.
pub fn convert_column(
    data: &DataFrame,
    column_name: &str,
    reference: &ReferenceTable,
    options: &ConvertOptions,
) -> Result<ColumnConversion> {
    let column = data
        .column(column_name)
        .map_err(|_| ConvertError::ColumnNotFound {
            column: column_name.to_string(),
        })?;

    let identifiers = extract_identifiers(column, options.separator());
    let Resolution {
        mapping,
        unresolved,
    } = resolve(&identifiers, reference, options)?;
    let data = apply_mapping(data, column_name, &mapping)?;

    tracing::debug!(
        column = column_name,
        identifiers = mapping.len(),
        unresolved = unresolved.len(),
        "converted identifier column"
    );

    Ok(ColumnConversion {
        data,
        mapping,
        unresolved,
    })
}
