//! Wrapper types for displaying catalog contents.
//!
//! These wrappers borrow a [`Catalog`] and format one view of it, handling
//! empty tables gracefully.

use std::fmt;

use crate::{catalog::Catalog, models::CategoryTemplate};

/// Lists every activity in catalog order.
///
/// # Examples
///
/// ```rust
/// use evening_core::{catalog::Catalog, display::ActivityList};
///
/// let catalog = Catalog::builtin();
/// let output = ActivityList(&catalog).to_string();
/// assert!(output.contains("- ☕ Coffee Shop (`coffee`)"));
/// ```
pub struct ActivityList<'a>(pub &'a Catalog);

impl<'a> fmt::Display for ActivityList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Activities")?;
        writeln!(f)?;

        if self.0.activities().is_empty() {
            return writeln!(f, "No activities found.");
        }

        for activity in self.0.activities() {
            writeln!(f, "- {activity} (`{}`)", activity.id)?;
        }
        Ok(())
    }
}

/// Lists every category with its suggested activities.
pub struct CategoryList<'a>(pub &'a Catalog);

impl<'a> fmt::Display for CategoryList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Categories")?;
        writeln!(f)?;

        if self.0.categories().is_empty() {
            return writeln!(f, "No categories found.");
        }

        for category in self.0.categories() {
            writeln!(f, "## {} (`{}`)", category.title(), category.id)?;
            writeln!(f)?;

            let suggested: Vec<String> = self
                .0
                .suggestions(&category.id)
                .unwrap_or_default()
                .into_iter()
                .map(ToString::to_string)
                .collect();
            if !suggested.is_empty() {
                writeln!(f, "- **Suggested**: {}", suggested.join(", "))?;
            }
            writeln!(f, "- **Tips**: {}", category.tips.len())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tips of a single category, as a titled bullet list.
pub struct Tips<'a>(pub &'a CategoryTemplate);

impl<'a> fmt::Display for Tips<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 💡 Tips for Your {}", self.0.title())?;
        writeln!(f)?;
        for tip in &self.0.tips {
            writeln!(f, "- {tip}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityDefinition;

    #[test]
    fn test_activity_list_contains_all_activities() {
        let catalog = Catalog::builtin();
        let output = ActivityList(&catalog).to_string();
        assert_eq!(output.lines().filter(|l| l.starts_with("- ")).count(), 16);
        assert!(output.contains("- 🎮 Arcade/Games (`arcade`)"));
    }

    #[test]
    fn test_empty_activity_list() {
        let catalog = Catalog::new(vec![], vec![]).unwrap();
        assert!(ActivityList(&catalog).to_string().contains("No activities found."));
        assert!(CategoryList(&catalog).to_string().contains("No categories found."));
    }

    #[test]
    fn test_category_list_shows_suggestions() {
        let catalog = Catalog::builtin();
        let output = CategoryList(&catalog).to_string();
        assert!(output.contains("## First Date (`first-date`)"));
        assert!(output.contains("## Romantic (`romantic`)"));
        assert!(output.contains(
            "- **Suggested**: 🍽️ Dinner, 🎭 Theater, 🍷 Wine Bar, 🏖️ Beach"
        ));
    }

    #[test]
    fn test_category_list_skips_unknown_suggestions() {
        let catalog = Catalog::new(
            vec![ActivityDefinition::new("spa", "💆", "Spa")],
            vec![CategoryTemplate {
                id: "relax".to_string(),
                suggestions: vec!["sauna".to_string(), "spa".to_string()],
                tips: vec!["Unplug".to_string()],
            }],
        )
        .unwrap();

        let output = CategoryList(&catalog).to_string();
        assert!(output.contains("- **Suggested**: 💆 Spa\n"));
        assert!(!output.contains("sauna"));
    }

    #[test]
    fn test_tips_display() {
        let catalog = Catalog::builtin();
        let template = catalog.template("adventure").unwrap();
        let output = Tips(template).to_string();
        assert!(output.starts_with("## 💡 Tips for Your Adventure\n"));
        assert!(output.contains("- Capture memories with photos\n"));
    }
}
