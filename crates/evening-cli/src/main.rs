//! Evening CLI Application
//!
//! Command-line interface for the evening planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use evening_core::PlannerBuilder;
use log::info;
use mcp::{run_stdio_server, EveningMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_catalog_path(catalog_file)
        .build()
        .context("Failed to load activity catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Evening started");

    match command {
        Some(Plan(args)) => Cli::new(planner, renderer).plan(args),
        Some(Activities) => Cli::new(planner, renderer).list_activities(),
        Some(Categories) => Cli::new(planner, renderer).list_categories(),
        Some(Tips(args)) => Cli::new(planner, renderer).show_tips(&args.into()),
        Some(ExportCatalog(args)) => Cli::new(planner, renderer).export_catalog(args),
        Some(Serve) => {
            info!("Starting Evening MCP server");
            run_stdio_server(EveningMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_categories(),
    }
}
