//! Identifier resolution against a reference table.

use std::collections::{BTreeMap, BTreeSet};

use geostd_model::{
    ConvertOptions, IdentifierIndex, MissingPolicy, ReferenceTable, Unresolved, UnresolvedAction,
};

use crate::error::{ConvertError, Result};

/// Outcome of resolving a set of identifiers.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Raw identifier (original casing) -> value under the target standard.
    pub mapping: BTreeMap<String, String>,
    /// Identifiers handled by the missing policy, in identifier order.
    pub unresolved: Vec<Unresolved>,
}

/// Resolve each identifier to its value under the target standard.
///
/// Matching is exact-string and case-insensitive against every cell of the
/// reference table; the first row in row-major order wins. Identifiers with
/// no usable match fall back to the missing policy and are reported as
/// events (and via `tracing::warn!` when enabled). The returned mapping
/// covers every requested identifier exactly once.
pub fn resolve(
    ids: &BTreeSet<String>,
    reference: &ReferenceTable,
    options: &ConvertOptions,
) -> Result<Resolution> {
    let target = reference
        .standard_index(&options.target_standard)
        .ok_or_else(|| ConvertError::UnknownStandard {
            standard: options.target_standard.clone(),
            available: reference.standards().join(", "),
        })?;

    let index = IdentifierIndex::build(reference);
    let mut resolution = Resolution::default();

    for identifier in ids {
        let row = index.lookup(identifier);
        match row.and_then(|row| reference.cell(row, target)) {
            Some(value) => {
                resolution
                    .mapping
                    .insert(identifier.clone(), value.to_string());
            }
            None => {
                let (replacement, action) = match &options.missing_policy {
                    MissingPolicy::Keep => (identifier.clone(), UnresolvedAction::Kept),
                    MissingPolicy::Replace(value) => {
                        (value.clone(), UnresolvedAction::ReplacedWith(value.clone()))
                    }
                };
                let event = if row.is_some() {
                    Unresolved::NoValueForStandard {
                        identifier: identifier.clone(),
                        standard: options.target_standard.clone(),
                        action,
                    }
                } else {
                    Unresolved::UnknownIdentifier {
                        identifier: identifier.clone(),
                        action,
                    }
                };
                if options.warn_on_unresolved {
                    tracing::warn!(identifier = %identifier, "{}", event.message());
                }
                resolution.unresolved.push(event);
                resolution.mapping.insert(identifier.clone(), replacement);
            }
        }
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceTable {
        let mut table =
            ReferenceTable::new(vec!["STATE_en_UN".to_string(), "ISO3".to_string()]);
        table.push_row(vec![Some("France".to_string()), Some("FRA".to_string())]);
        table.push_row(vec![Some("Kosovo".to_string()), None]);
        table
    }

    #[test]
    fn test_unknown_standard_is_fatal() {
        let ids = BTreeSet::from(["France".to_string()]);
        let options = ConvertOptions::new().with_target_standard("ISO2");
        let err = resolve(&ids, &reference(), &options).unwrap_err();
        match err {
            ConvertError::UnknownStandard { standard, available } => {
                assert_eq!(standard, "ISO2");
                assert_eq!(available, "STATE_en_UN, ISO3");
            }
            other => panic!("expected UnknownStandard, got {other}"),
        }
    }

    #[test]
    fn test_matched_row_without_target_value_reports_distinctly() {
        let ids = BTreeSet::from(["kosovo".to_string()]);
        let options = ConvertOptions::new().with_target_standard("ISO3");
        let resolution = resolve(&ids, &reference(), &options).unwrap();

        assert_eq!(resolution.mapping["kosovo"], "kosovo");
        assert_eq!(resolution.unresolved.len(), 1);
        assert!(matches!(
            resolution.unresolved[0],
            Unresolved::NoValueForStandard { .. }
        ));
    }
}
