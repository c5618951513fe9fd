//! Reference table loading for country identifier harmonization.
//!
//! Reference tables live as headed CSV files under the workspace
//! `standards/` directory (overridable via `GEOSTD_STANDARDS_DIR`): the
//! header names the standards, each record is one country.

pub mod error;
pub mod loader;

pub use error::StandardsError;
pub use loader::{
    default_standards_root, load_default_reference_table, load_reference_table,
    DEFAULT_TABLE_FILE, STANDARDS_ENV_VAR,
};
