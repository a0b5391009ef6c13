//! Command argument definitions and their handlers
//!
//! Argument structs carry the clap-specific attributes and convert into the
//! core parameter types, keeping `evening_core::params` free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use evening_core::{
    ActivityList, Atmosphere, CategoryId, CategoryList, DressCode, DurationBucket,
    OperationStatus, PlanEvening, Planner, PlannerBuilder, Tips, Transportation,
};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Generate an itinerary
///
/// Budget and location are required, as is at least one activity. Selected
/// activities are scheduled in catalog order, two hours apart, up to two for
/// the `2-3` duration and three otherwise. Naming an activity twice
/// deselects it again.
#[derive(Args)]
pub struct PlanArgs {
    #[arg(
        short,
        long,
        default_value = "first-date",
        help = "Category: first-date, casual, romantic, anniversary or adventure"
    )]
    pub category: String,
    #[arg(
        long,
        value_name = "YYYY-MM-DDTHH:MM",
        help = "Local start time; defaults to tomorrow at 19:00"
    )]
    pub at: Option<String>,
    #[arg(short, long, help = "Total budget for the evening")]
    pub budget: Option<String>,
    #[arg(short, long, help = "Where the evening takes place")]
    pub location: Option<String>,
    #[arg(long, value_enum, help = "Desired atmosphere (default: intimate)")]
    pub atmosphere: Option<AtmosphereArg>,
    #[arg(long, value_enum, help = "How you get around (default: drive)")]
    pub transportation: Option<TransportationArg>,
    #[arg(short, long, value_enum, help = "How long the evening lasts (default: 2-3)")]
    pub duration: Option<DurationArg>,
    #[arg(long, value_enum, help = "Dress code (default: casual)")]
    pub dress_code: Option<DressCodeArg>,
    #[arg(
        short = 'a',
        long = "activity",
        value_delimiter = ',',
        help = "Activity ids to select, repeatable or comma-separated"
    )]
    pub activities: Vec<String>,
    #[arg(long, help = "Print the itinerary as JSON instead of markdown")]
    pub json: bool,
}

impl From<PlanArgs> for PlanEvening {
    fn from(val: PlanArgs) -> Self {
        PlanEvening {
            category: val.category,
            start: val.at,
            budget: val.budget,
            location: val.location,
            atmosphere: val.atmosphere.map(Into::into),
            transportation: val.transportation.map(Into::into),
            duration: val.duration.map(Into::into),
            dress_code: val.dress_code.map(Into::into),
            activities: val.activities,
        }
    }
}

/// Show the tips of a category
#[derive(Args)]
pub struct TipsArgs {
    #[arg(help = "Category id, e.g. romantic")]
    pub category: String,
}

impl From<TipsArgs> for CategoryId {
    fn from(val: TipsArgs) -> Self {
        CategoryId {
            category: val.category,
        }
    }
}

/// Write the loaded catalog as JSON
#[derive(Args)]
pub struct ExportCatalogArgs {
    #[arg(help = "Destination file; defaults to $XDG_CONFIG_HOME/evening/catalog.json")]
    pub path: Option<PathBuf>,
    #[arg(long, help = "Overwrite the destination if it exists")]
    pub force: bool,
}

/// Command-line representation of duration buckets
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DurationArg {
    /// Two to three hours
    #[value(name = "2-3")]
    Short,
    /// Four to six hours
    #[value(name = "4-6")]
    Long,
    /// The whole day
    #[value(name = "full-day")]
    FullDay,
}

impl From<DurationArg> for DurationBucket {
    fn from(val: DurationArg) -> Self {
        match val {
            DurationArg::Short => DurationBucket::Short,
            DurationArg::Long => DurationBucket::Long,
            DurationArg::FullDay => DurationBucket::FullDay,
        }
    }
}

/// Command-line representation of atmospheres
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum AtmosphereArg {
    Intimate,
    Lively,
    Relaxed,
    Adventurous,
}

impl From<AtmosphereArg> for Atmosphere {
    fn from(val: AtmosphereArg) -> Self {
        match val {
            AtmosphereArg::Intimate => Atmosphere::Intimate,
            AtmosphereArg::Lively => Atmosphere::Lively,
            AtmosphereArg::Relaxed => Atmosphere::Relaxed,
            AtmosphereArg::Adventurous => Atmosphere::Adventurous,
        }
    }
}

/// Command-line representation of transportation choices
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TransportationArg {
    Drive,
    Transit,
    Walk,
    Rideshare,
}

impl From<TransportationArg> for Transportation {
    fn from(val: TransportationArg) -> Self {
        match val {
            TransportationArg::Drive => Transportation::Drive,
            TransportationArg::Transit => Transportation::Transit,
            TransportationArg::Walk => Transportation::Walk,
            TransportationArg::Rideshare => Transportation::Rideshare,
        }
    }
}

/// Command-line representation of dress codes
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DressCodeArg {
    Casual,
    SmartCasual,
    Formal,
    Active,
}

impl From<DressCodeArg> for DressCode {
    fn from(val: DressCodeArg) -> Self {
        match val {
            DressCodeArg::Casual => DressCode::Casual,
            DressCodeArg::SmartCasual => DressCode::SmartCasual,
            DressCodeArg::Formal => DressCode::Formal,
            DressCodeArg::Active => DressCode::Active,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs one CLI command against a planner and prints the result.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generate and print an itinerary.
    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let json = args.json;
        let params = PlanEvening::from(args);
        debug!("plan: {:?}", params);

        let itinerary = self.planner.plan(&params)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&itinerary)?);
            Ok(())
        } else {
            self.renderer.render(&itinerary.to_string())
        }
    }

    /// Print the activity catalog.
    pub fn list_activities(&self) -> Result<()> {
        self.renderer.render(&ActivityList(self.planner.catalog()).to_string())
    }

    /// Print all categories with their suggestions.
    pub fn list_categories(&self) -> Result<()> {
        self.renderer.render(&CategoryList(self.planner.catalog()).to_string())
    }

    /// Print the tips of one category.
    pub fn show_tips(&self, params: &CategoryId) -> Result<()> {
        let template = self.planner.category(&params.category)?;
        self.renderer.render(&Tips(template).to_string())
    }

    /// Write the catalog currently in use as pretty JSON.
    pub fn export_catalog(&self, args: ExportCatalogArgs) -> Result<()> {
        let path = match args.path {
            Some(path) => path,
            None => PlannerBuilder::user_catalog_path()
                .context("Failed to resolve catalog location")?,
        };

        if path.exists() && !args.force {
            bail!(
                "{} already exists; pass --force to overwrite",
                path.display()
            );
        }

        let json = serde_json::to_string_pretty(self.planner.catalog())?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let status = OperationStatus::success(format!("Catalog written to {}", path.display()));
        self.renderer.render(&status.to_string())
    }
}
