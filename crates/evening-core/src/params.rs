//! Parameter structures for planner operations
//!
//! These structures are shared across interfaces (CLI, MCP) and carry no
//! framework-specific derives apart from the optional JSON schema. Interface
//! layers wrap or convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    form::DEFAULT_CATEGORY,
    models::{Atmosphere, DressCode, DurationBucket, Transportation},
};

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Parameters for planning an evening.
///
/// Mirrors the fields of the planning form. Optional fields left unset take
/// the form defaults; `budget` and `location` are required by validation but
/// optional here so that missing values produce a validation error rather
/// than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanEvening {
    /// Category id: first-date, casual, romantic, anniversary or adventure
    #[serde(default = "default_category")]
    pub category: String,
    /// Local start time as `YYYY-MM-DDTHH:MM`; defaults to tomorrow 19:00
    pub start: Option<String>,
    /// Total budget for the evening, e.g. "100"
    pub budget: Option<String>,
    /// Where the evening takes place
    pub location: Option<String>,
    /// intimate, lively, relaxed or adventurous
    pub atmosphere: Option<Atmosphere>,
    /// drive, transit, walk or rideshare
    pub transportation: Option<Transportation>,
    /// Duration bucket: 2-3, 4-6 or full-day
    pub duration: Option<DurationBucket>,
    /// casual, smart-casual, formal or active
    pub dress_code: Option<DressCode>,
    /// Selected activity ids, in selection order
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Default for PlanEvening {
    fn default() -> Self {
        Self {
            category: default_category(),
            start: None,
            budget: None,
            location: None,
            atmosphere: None,
            transportation: None,
            duration: None,
            dress_code: None,
            activities: Vec::new(),
        }
    }
}

/// Parameters for operations addressing one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CategoryId {
    /// The category id, e.g. `romantic`
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_evening_defaults_category() {
        let params: PlanEvening = serde_json::from_str(r#"{"activities": ["spa"]}"#).unwrap();
        assert_eq!(params.category, "first-date");
        assert_eq!(params.activities, ["spa"]);
        assert!(params.duration.is_none());
        assert_eq!(PlanEvening::default().category, "first-date");
    }

    #[test]
    fn test_plan_evening_parses_options() {
        let params: PlanEvening = serde_json::from_str(
            r#"{"category": "adventure", "duration": "full-day", "dress_code": "active"}"#,
        )
        .unwrap();
        assert_eq!(params.duration, Some(DurationBucket::FullDay));
        assert_eq!(params.dress_code, Some(DressCode::Active));
    }
}
