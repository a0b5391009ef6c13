//! MCP tool handler implementations

use std::sync::Arc;

use evening_core::{params as core, ActivityList, CategoryList, Planner, Tips};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Passes deserialization and schema generation straight through to the
/// wrapped core type, so core params stay free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type PlanEvening = McpParams<core::PlanEvening>;
pub type CategoryId = McpParams<core::CategoryId>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub fn plan_evening(&self, Parameters(params): Parameters<PlanEvening>) -> McpResult {
        debug!("plan_evening: {:?}", params);

        let itinerary = self
            .planner
            .plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to plan evening", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            itinerary.to_string(),
        )]))
    }

    pub fn list_activities(&self) -> McpResult {
        let output = ActivityList(self.planner.catalog()).to_string();
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    pub fn list_categories(&self) -> McpResult {
        let output = CategoryList(self.planner.catalog()).to_string();
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    pub fn show_tips(&self, Parameters(params): Parameters<CategoryId>) -> McpResult {
        debug!("show_tips: {:?}", params);

        let template = self
            .planner
            .category(&params.as_ref().category)
            .map_err(|e| to_mcp_error("Failed to show tips", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            Tips(template).to_string(),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    fn handlers() -> McpHandlers {
        McpHandlers::new(Arc::new(Planner::default()))
    }

    fn text_of(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).expect("result serializes");
        value["content"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|c| c["text"].as_str())
            .collect()
    }

    fn plan_params(json: &str) -> Parameters<PlanEvening> {
        Parameters(serde_json::from_str(json).expect("valid params"))
    }

    #[test]
    fn test_plan_evening_tool() {
        let result = handlers()
            .plan_evening(plan_params(
                r#"{
                    "category": "romantic",
                    "start": "2024-02-14T18:00",
                    "budget": "150",
                    "location": "Old Town",
                    "duration": "4-6",
                    "activities": ["dinner", "theater", "bar", "beach"]
                }"#,
            ))
            .expect("tool succeeds");

        let text = text_of(&result);
        assert!(text.contains("### 6:00 PM: 🍽️ Dinner"));
        assert!(text.contains("### 8:00 PM: 🎭 Theater"));
        assert!(text.contains("### 10:00 PM: 🍷 Wine Bar"));
        assert!(text.contains("romantic restaurant"));
        assert!(text.contains("💰 Budget: $50"));
        assert!(!text.contains("Beach"));
    }

    #[test]
    fn test_plan_evening_validation_error() {
        let err = handlers()
            .plan_evening(plan_params(r#"{"activities": ["spa"]}"#))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Please fill in budget and location"));
    }

    #[test]
    fn test_list_tools() {
        let handlers = handlers();
        assert!(text_of(&handlers.list_activities().unwrap()).contains("💆 Spa"));
        assert!(text_of(&handlers.list_categories().unwrap()).contains("Anniversary"));
    }

    #[test]
    fn test_show_tips_unknown_category() {
        let params = Parameters(serde_json::from_str(r#"{"category": "brunch"}"#).unwrap());
        let err = handlers().show_tips(params).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
