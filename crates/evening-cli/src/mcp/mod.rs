//! MCP server implementation for Evening
//!
//! Exposes the planner to AI assistants over the Model Context Protocol. The
//! planner is immutable once built, so the server shares it without locking.

use std::sync::Arc;

use anyhow::Result;
use evening_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CategoryId, McpResult, PlanEvening};

/// MCP server for Evening
#[derive(Clone)]
pub struct EveningMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl EveningMcpServer {
    /// Create a new Evening MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "plan_evening",
        description = "Generate an itinerary for an evening out. Requires budget, location and at least one activity id (see list_activities). Optional: category (first-date, casual, romantic, anniversary, adventure; default first-date), start as YYYY-MM-DDTHH:MM local time (default tomorrow 19:00), duration (2-3, 4-6, full-day), atmosphere, transportation and dress_code. Activities are scheduled in catalog order two hours apart, two for 2-3 and three otherwise, followed by category tips."
    )]
    async fn plan_evening(&self, params: Parameters<PlanEvening>) -> McpResult {
        self.handlers().plan_evening(params)
    }

    #[tool(
        name = "list_activities",
        description = "List every activity in the catalog with its icon, label and id. Use the ids in plan_evening."
    )]
    async fn list_activities(&self) -> McpResult {
        self.handlers().list_activities()
    }

    #[tool(
        name = "list_categories",
        description = "List the outing categories with their suggested activities. Use a category id in plan_evening or show_tips."
    )]
    async fn list_categories(&self) -> McpResult {
        self.handlers().list_categories()
    }

    #[tool(
        name = "show_tips",
        description = "Show the tips for one category, e.g. romantic. Fails for unknown categories."
    )]
    async fn show_tips(&self, params: Parameters<CategoryId>) -> McpResult {
        self.handlers().show_tips(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for EveningMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Evening plans an evening out from a few preferences.

## Workflow
1. Call `list_categories` to pick the tone of the outing
2. Call `list_activities` to see which activity ids exist
3. Call `plan_evening` with budget, location and the chosen activity ids

## Notes
- The number of scheduled activities depends on duration: 2 for "2-3", 3 for "4-6" and "full-day"
- Slots start at the given time and advance by two hours
- The budget is split evenly across the duration's slot count
- `show_tips` returns a category's tips without planning"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: EveningMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Evening MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
