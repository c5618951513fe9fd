//! Unresolved-identifier events.
//!
//! The resolver never fails on unmatched data; it records what it did with
//! each unresolved identifier as a structured event so callers can inspect
//! or escalate them deterministically.

use serde::{Deserialize, Serialize};

/// What the resolver substituted for an unresolved identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedAction {
    /// Kept the identifier as-is.
    Kept,
    /// Replaced the identifier with the given value.
    ReplacedWith(String),
}

/// An identifier the resolver could not convert - each variant carries
/// only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unresolved {
    /// No cell in the reference table matched the identifier.
    UnknownIdentifier {
        identifier: String,
        action: UnresolvedAction,
    },
    /// A row matched, but it holds no value under the target standard.
    NoValueForStandard {
        identifier: String,
        standard: String,
        action: UnresolvedAction,
    },
}

impl Unresolved {
    /// The raw identifier (all events have one).
    pub fn identifier(&self) -> &str {
        match self {
            Unresolved::UnknownIdentifier { identifier, .. } => identifier,
            Unresolved::NoValueForStandard { identifier, .. } => identifier,
        }
    }

    /// What the resolver did with the identifier.
    pub fn action(&self) -> &UnresolvedAction {
        match self {
            Unresolved::UnknownIdentifier { action, .. } => action,
            Unresolved::NoValueForStandard { action, .. } => action,
        }
    }

    /// Human-readable message for logs and reports.
    pub fn message(&self) -> String {
        let disposition = match self.action() {
            UnresolvedAction::Kept => "keeping as is".to_string(),
            UnresolvedAction::ReplacedWith(value) => format!("replacing with {value:?}"),
        };
        match self {
            Unresolved::UnknownIdentifier { identifier, .. } => {
                format!("Unknown identifier {identifier:?}, {disposition}")
            }
            Unresolved::NoValueForStandard {
                identifier,
                standard,
                ..
            } => {
                format!("Identifier {identifier:?} has no value under {standard}, {disposition}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_identifier() {
        let kept = Unresolved::UnknownIdentifier {
            identifier: "Freedonia".to_string(),
            action: UnresolvedAction::Kept,
        };
        assert_eq!(kept.message(), "Unknown identifier \"Freedonia\", keeping as is");

        let replaced = Unresolved::NoValueForStandard {
            identifier: "Kosovo".to_string(),
            standard: "STATE_en_UN".to_string(),
            action: UnresolvedAction::ReplacedWith("Unknown".to_string()),
        };
        assert_eq!(
            replaced.message(),
            "Identifier \"Kosovo\" has no value under STATE_en_UN, replacing with \"Unknown\""
        );
    }
}
