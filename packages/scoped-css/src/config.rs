//! Scoping Configuration

use serde::{Deserialize, Serialize};

/// Options for [`crate::scope_css_with_options`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeOptions {
    /// Prefix of the attribute marking scoped elements; selectors become
    /// `[<attribute_prefix><scope>] selector`
    pub attribute_prefix: String,
}

impl Default for ScopeOptions {
    fn default() -> Self {
        ScopeOptions {
            attribute_prefix: "data-".to_string(),
        }
    }
}

impl ScopeOptions {
    /// Options handed over as JSON, e.g. `{"attributePrefix": "x-"}`.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
