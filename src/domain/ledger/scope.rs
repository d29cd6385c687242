//! Evaluation scope for aggregation and fairness queries.

use serde::{Deserialize, Serialize};

/// Which part of the ledger a query looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Every group in the ledger.
    #[default]
    All,
    /// A single group, by name.
    Group(String),
}

impl Scope {
    /// Builds a scope from an optional group name.
    ///
    /// A missing or blank name means the whole ledger.
    pub fn from_group(group: Option<String>) -> Self {
        match group {
            Some(name) if !name.trim().is_empty() => Scope::Group(name),
            _ => Scope::All,
        }
    }

    /// Whether the named group falls inside this scope.
    pub fn includes(&self, group_name: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Group(name) => name == group_name,
        }
    }

    pub fn group_name(&self) -> Option<&str> {
        match self {
            Scope::All => None,
            Scope::Group(name) => Some(name),
        }
    }
}
