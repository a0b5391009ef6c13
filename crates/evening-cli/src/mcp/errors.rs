//! Error mapping for the MCP server

use evening_core::PlannerError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error.
///
/// Validation failures and unknown categories are the caller's to fix and
/// map to `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        PlannerError::UnknownCategory { .. } => ErrorData::invalid_params(text, None),
        e if e.is_validation() => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
