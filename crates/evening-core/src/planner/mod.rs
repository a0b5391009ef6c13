//! High-level planner API.
//!
//! The [`Planner`] owns an immutable [`Catalog`] and turns plan requests into
//! itineraries. Generation itself is the pure function [`generate`]; the
//! planner adds the catalog lookup and the parameter handling shared by the
//! CLI and the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  PlanEvening    │    │    PlanForm     │    │    generate     │
//! │  (params)       │───▶│ (validation)    │───▶│ (PlanRequest +  │
//! │                 │    │                 │    │  Catalog)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use evening_core::{PlannerBuilder, params::PlanEvening};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().builtin_only().build()?;
//!
//! let params = PlanEvening {
//!     category: "romantic".to_string(),
//!     start: Some("2024-02-14T18:00".to_string()),
//!     budget: Some("150".to_string()),
//!     location: Some("Old Town".to_string()),
//!     activities: vec!["dinner".to_string(), "theater".to_string()],
//!     ..Default::default()
//! };
//! let itinerary = planner.plan(&params)?;
//! assert_eq!(itinerary.entries[0].budget, 75);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod descriptions;
pub mod generate;


use log::debug;

pub use builder::PlannerBuilder;
pub use descriptions::{describe_activity, GENERIC_DESCRIPTION};
pub use generate::{budget_share, generate, slot_time, SLOT_HOURS};

use crate::{
    catalog::Catalog,
    error::Result,
    form::PlanForm,
    models::{CategoryTemplate, Itinerary, PlanRequest},
    params::PlanEvening,
};

/// Main planner interface.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
}

impl Planner {
    /// Creates a new planner over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this planner schedules from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generates an itinerary for an already validated request.
    pub fn generate(&self, request: &PlanRequest) -> Result<Itinerary> {
        generate(request, &self.catalog)
    }

    /// Fills a fresh [`PlanForm`] from interface parameters, validates it and
    /// generates the itinerary.
    ///
    /// Activities are toggled in the given order, so an id listed twice ends
    /// up deselected.
    pub fn plan(&self, params: &PlanEvening) -> Result<Itinerary> {
        let form = PlanForm::try_from(params)?;
        let request = form.submit()?;
        debug!("Planning {:?}", request);
        self.generate(&request)
    }

    /// Looks up the template of a category.
    pub fn category(&self, category: &str) -> Result<&CategoryTemplate> {
        self.catalog.require_template(category)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
