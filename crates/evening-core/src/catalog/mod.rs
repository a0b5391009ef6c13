//! Reference tables consumed by the itinerary generator.
//!
//! A [`Catalog`] bundles the activity list and the category templates. The
//! built-in catalog mirrors the options offered by the planning form; a JSON
//! file with the same shape can replace it (see
//! [`crate::planner::PlannerBuilder::with_catalog_path`]).
//!
//! ```json
//! {
//!   "activities": [{ "id": "dinner", "icon": "🍽️", "label": "Dinner" }],
//!   "categories": [
//!     { "id": "casual", "suggestions": ["dinner"], "tips": ["Relax"] }
//!   ]
//! }
//! ```

use std::{collections::HashSet, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{ActivityDefinition, CategoryTemplate},
};

mod builtin;

/// Immutable activity catalog plus category templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    activities: Vec<ActivityDefinition>,
    categories: Vec<CategoryTemplate>,
}

/// On-disk representation, validated by [`Catalog::new`].
#[derive(Deserialize)]
struct CatalogFile {
    activities: Vec<ActivityDefinition>,
    categories: Vec<CategoryTemplate>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and categories without tips.
    pub fn new(
        activities: Vec<ActivityDefinition>,
        categories: Vec<CategoryTemplate>,
    ) -> Result<Self> {
        validate_activities(&activities)?;
        validate_categories(&categories)?;

        Ok(Self {
            activities,
            categories,
        })
    }

    /// The embedded catalog: 16 activities and 5 categories.
    pub fn builtin() -> Self {
        let activities = builtin::ACTIVITIES
            .iter()
            .map(|(id, icon, label)| ActivityDefinition::new(*id, *icon, *label))
            .collect();
        let categories = builtin::CATEGORIES
            .iter()
            .map(|c| CategoryTemplate {
                id: c.id.to_string(),
                suggestions: c.suggestions.iter().map(|s| s.to_string()).collect(),
                tips: c.tips.iter().map(|t| t.to_string()).collect(),
            })
            .collect();

        Self {
            activities,
            categories,
        }
    }

    /// Parses and validates a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.activities, file.categories)
    }

    /// Reads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be read,
    /// `PlannerError::Serialization` for malformed JSON and
    /// `PlannerError::InvalidInput` when the tables fail validation.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// All activities in catalog order.
    pub fn activities(&self) -> &[ActivityDefinition] {
        &self.activities
    }

    /// All category templates in declared order.
    pub fn categories(&self) -> &[CategoryTemplate] {
        &self.categories
    }

    /// Looks up an activity by id.
    pub fn activity(&self, id: &str) -> Option<&ActivityDefinition> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Looks up a category template by id.
    pub fn template(&self, category: &str) -> Option<&CategoryTemplate> {
        self.categories.iter().find(|c| c.id == category)
    }

    /// Looks up a category template, failing loudly for unknown ids.
    pub fn require_template(&self, category: &str) -> Result<&CategoryTemplate> {
        self.template(category)
            .ok_or_else(|| PlannerError::unknown_category(category))
    }

    /// Tips for a category, verbatim.
    pub fn tips(&self, category: &str) -> Result<&[String]> {
        Ok(&self.require_template(category)?.tips)
    }

    /// Suggested activities for a category, resolved against the catalog.
    ///
    /// Suggestion ids that are not in the catalog are skipped.
    pub fn suggestions(&self, category: &str) -> Result<Vec<&ActivityDefinition>> {
        let template = self.require_template(category)?;
        Ok(template
            .suggestions
            .iter()
            .filter_map(|id| self.activity(id))
            .collect())
    }

    /// Catalog activities whose ids are selected, in catalog order.
    pub fn select<'a>(
        &'a self,
        selected: &'a [String],
    ) -> impl Iterator<Item = &'a ActivityDefinition> {
        self.activities
            .iter()
            .filter(move |a| selected.iter().any(|id| *id == a.id))
    }
}

fn validate_activities(activities: &[ActivityDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for activity in activities {
        if activity.id.trim().is_empty() {
            return Err(PlannerError::invalid_input("activities")
                .with_reason("activity id cannot be empty"));
        }
        if !seen.insert(activity.id.as_str()) {
            return Err(PlannerError::invalid_input("activities")
                .with_reason(format!("duplicate activity id '{}'", activity.id)));
        }
    }
    Ok(())
}

fn validate_categories(categories: &[CategoryTemplate]) -> Result<()> {
    let mut seen = HashSet::new();
    for category in categories {
        if !seen.insert(category.id.as_str()) {
            return Err(PlannerError::invalid_input("categories")
                .with_reason(format!("duplicate category id '{}'", category.id)));
        }
        if category.tips.is_empty() {
            return Err(PlannerError::invalid_input("categories")
                .with_reason(format!("category '{}' has no tips", category.id)));
        }
    }
    Ok(())
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.activities().len(), 16);
        assert_eq!(catalog.categories().len(), 5);
        for category in catalog.categories() {
            assert_eq!(category.suggestions.len(), 4);
            assert_eq!(category.tips.len(), 4);
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::new(
            catalog.activities().to_vec(),
            catalog.categories().to_vec(),
        )
        .expect("builtin catalog should validate");
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn test_activity_lookup() {
        let catalog = Catalog::builtin();
        let park = catalog.activity("park").expect("park exists");
        assert_eq!(park.label, "Park Walk");
        assert_eq!(park.icon, "🌳");
        assert!(catalog.activity("zzz").is_none());
    }

    #[test]
    fn test_unknown_category_fails() {
        let catalog = Catalog::builtin();
        let err = catalog.tips("brunch").unwrap_err();
        assert!(matches!(err, PlannerError::UnknownCategory { ref id } if id == "brunch"));
    }

    #[test]
    fn test_suggestions_resolve_in_declared_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog
            .suggestions("adventure")
            .unwrap()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["hiking", "sports", "cooking", "dancing"]);
    }

    #[test]
    fn test_select_uses_catalog_order() {
        let catalog = Catalog::builtin();
        let selected = vec!["park".to_string(), "zzz".to_string(), "dinner".to_string()];
        let ids: Vec<_> = catalog.select(&selected).map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["dinner", "park"]);
    }

    #[test]
    fn test_from_json_rejects_duplicate_activity() {
        let json = r#"{
            "activities": [
                {"id": "tea", "icon": "🍵", "label": "Tea"},
                {"id": "tea", "icon": "🍵", "label": "More Tea"}
            ],
            "categories": [{"id": "calm", "tips": ["Breathe"]}]
        }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate activity id 'tea'"));
    }

    #[test]
    fn test_from_json_rejects_category_without_tips() {
        let json = r#"{
            "activities": [],
            "categories": [{"id": "calm", "suggestions": [], "tips": []}]
        }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("has no tips"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PlannerError::Serialization { .. }));
    }
}
