//! Configuration options for column conversion.

use serde::{Deserialize, Serialize};

/// Default target standard: UN English country names (unterm.un.org).
pub const DEFAULT_STANDARD: &str = "STATE_en_UN";

/// Policy for identifiers with no usable match in the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingPolicy {
    /// Leave the identifier unchanged.
    #[default]
    Keep,
    /// Replace the identifier with the given literal value.
    ///
    /// `Replace(String::new())` clears the identifier to an empty string.
    Replace(String),
}

/// Options for converting an identifier column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Delimiter packing several identifiers into one cell.
    ///
    /// `None` treats the whole cell as a single identifier. An empty
    /// separator is treated as unset.
    pub separator: Option<String>,

    /// Standard to convert to; must name a reference-table column.
    pub target_standard: String,

    /// Emit a `tracing` warning per unresolved identifier.
    ///
    /// The structured event list is returned either way.
    pub warn_on_unresolved: bool,

    /// What to do with identifiers that resolve to nothing.
    pub missing_policy: MissingPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            separator: None,
            target_standard: DEFAULT_STANDARD.to_string(),
            warn_on_unresolved: true,
            missing_policy: MissingPolicy::Keep,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.separator = if separator.is_empty() {
            None
        } else {
            Some(separator)
        };
        self
    }

    pub fn with_target_standard(mut self, standard: impl Into<String>) -> Self {
        self.target_standard = standard.into();
        self
    }

    pub fn with_warnings(mut self, enable: bool) -> Self {
        self.warn_on_unresolved = enable;
        self
    }

    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// The separator to split on, if one is configured.
    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref().filter(|s| !s.is_empty())
    }
}
