//! Category template definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Suggestions and tips attached to a category such as `romantic`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CategoryTemplate {
    /// Category identifier, e.g. `first-date`
    pub id: String,

    /// Suggested activity ids, in display order. Informational only; the
    /// generator never enforces them.
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Tips shown with every itinerary of this category
    pub tips: Vec<String>,
}

impl CategoryTemplate {
    /// Human readable title, e.g. `First Date` for `first-date`.
    ///
    /// Only the first hyphen is turned into a space, matching how the tips
    /// header has always been rendered.
    pub fn title(&self) -> String {
        category_title(&self.id)
    }
}

/// Formats a category identifier as a title.
pub fn category_title(id: &str) -> String {
    capitalize(&id.replacen('-', " ", 1))
}

/// Uppercases the first character of every space separated word.
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
