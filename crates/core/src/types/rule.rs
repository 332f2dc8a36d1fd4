use serde::{Deserialize, Serialize};

use super::location::QueryLocation;

/// One rule declared in a package, as returned by the query engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecord {
    /// Fully qualified target label (e.g., "//pkg:mylib")
    pub name: String,
    /// Rule kind (e.g., "go_library", "rust_test")
    pub rule_class: String,
    pub location: QueryLocation,
}

impl RuleRecord {
    pub fn new(
        name: impl Into<String>,
        rule_class: impl Into<String>,
        location: QueryLocation,
    ) -> Self {
        Self {
            name: name.into(),
            rule_class: rule_class.into(),
            location,
        }
    }
}

/// The rules a single query returned, in query order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub rules: Vec<RuleRecord>,
}
