//! Error types for column conversion.

use thiserror::Error;

/// Errors from column conversion operations.
///
/// Misconfiguration is fatal to the call; unmatched identifiers are not
/// errors and are handled by the missing policy instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Requested target standard is not a column of the reference table.
    #[error("unknown target standard {standard:?}; available standards: {available}")]
    UnknownStandard { standard: String, available: String },

    /// Requested column does not exist in the input data.
    #[error("column not found in input data: {column}")]
    ColumnNotFound { column: String },

    /// DataFrame manipulation failure.
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
