use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ExportCatalogArgs, PlanArgs, TipsArgs};

/// Plan an evening out from a few preferences
///
/// Pick a category, a start time, a budget and a location, select the
/// activities you like, and get a short schedule with descriptions and tips.
/// The same planner is available to AI assistants through the MCP server
/// mode.
#[derive(Parser)]
#[command(version, about, name = "evening")]
pub struct Args {
    /// Path to a JSON activity catalog. Defaults to
    /// $XDG_CONFIG_HOME/evening/catalog.json when present, otherwise the
    /// built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Evening CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an itinerary
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// List the activity catalog
    #[command(alias = "a")]
    Activities,
    /// List categories with their suggested activities
    #[command(alias = "c")]
    Categories,
    /// Show the tips of a category
    #[command(alias = "t")]
    Tips(TipsArgs),
    /// Write the built-in catalog as JSON, as a starting point for a custom
    /// catalog
    ExportCatalog(ExportCatalogArgs),
    /// Start the MCP server
    Serve,
}
