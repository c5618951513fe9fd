//! Reference table loading from CSV files.
//!
//! A reference file is a headed CSV: the header row names the standards,
//! each record is one country. Empty fields become missing cells.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use geostd_model::ReferenceTable;

use crate::error::StandardsError;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "GEOSTD_STANDARDS_DIR";

/// File name of the shipped country reference table.
pub const DEFAULT_TABLE_FILE: &str = "countries.csv";

/// Get the default standards root directory.
///
/// Checks the `GEOSTD_STANDARDS_DIR` environment variable first,
/// then falls back to the `standards/` directory at the workspace root.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Load the shipped country reference table from the default root.
pub fn load_default_reference_table() -> Result<ReferenceTable, StandardsError> {
    load_reference_table(&default_standards_root().join(DEFAULT_TABLE_FILE))
}

/// Load a reference table from a CSV file.
///
/// Handles BOM characters in the header and trims whitespace from every
/// value. Fails if the header has no columns or repeats a standard name.
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;

    let headers = reader
        .headers()
        .map_err(|err| csv_error(path, err))?
        .clone();

    let standards: Vec<String> = headers
        .iter()
        .map(|name| name.trim_matches('\u{feff}').trim().to_string())
        .collect();

    if standards.is_empty() || standards.iter().all(String::is_empty) {
        return Err(StandardsError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    for (idx, standard) in standards.iter().enumerate() {
        if standards[..idx].contains(standard) {
            return Err(StandardsError::DuplicateStandard {
                path: path.to_path_buf(),
                standard: standard.clone(),
            });
        }
    }

    let mut table = ReferenceTable::new(standards);
    for record in reader.records() {
        let record = record.map_err(|err| csv_error(path, err))?;
        let cells: Vec<Option<String>> = record
            .iter()
            .map(|value| {
                let value = value.trim();
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            })
            .collect();
        table.push_row(cells);
    }

    Ok(table)
}

fn csv_error(path: &Path, err: csv::Error) -> StandardsError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StandardsError::io(path, source),
        _ => StandardsError::Csv {
            path: path.to_path_buf(),
            message,
        },
    }
}
