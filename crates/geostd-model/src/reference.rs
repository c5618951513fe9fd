//! Multi-standard country reference table.
//!
//! One row per country/entity, one column per naming standard. Column names
//! are standard identifiers (e.g. `STATE_en_UN`, `ISO3`). A row may lack a
//! value for some standards.

use serde::{Deserialize, Serialize};

/// A table of country identifiers across naming standards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTable {
    standards: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl ReferenceTable {
    /// Create an empty table with the given standard columns.
    pub fn new(standards: Vec<String>) -> Self {
        Self {
            standards,
            rows: Vec::new(),
        }
    }

    /// Append a row of cells, one per standard.
    ///
    /// Short rows are padded with missing cells; excess cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) {
        cells.resize(self.standards.len(), None);
        self.rows.push(cells);
    }

    /// The standard names, in column order.
    pub fn standards(&self) -> &[String] {
        &self.standards
    }

    /// Column index of a standard, by exact name.
    pub fn standard_index(&self, standard: &str) -> Option<usize> {
        self.standards.iter().position(|name| name == standard)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell value at (row, column), if present and non-empty.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(column)?
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    /// Iterate the cells of one row in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|cells| cells.iter().map(Option::as_deref))
    }
}
