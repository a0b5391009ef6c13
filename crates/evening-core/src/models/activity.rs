//! Activity model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One selectable leisure option in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ActivityDefinition {
    /// Unique key, e.g. `dinner`
    pub id: String,

    /// Display icon (usually a single emoji)
    pub icon: String,

    /// Human readable label
    pub label: String,
}

impl ActivityDefinition {
    /// Creates a new activity definition.
    pub fn new(id: impl Into<String>, icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            label: label.into(),
        }
    }
}
