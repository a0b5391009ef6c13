//! Core library for the evening planner.
//!
//! This crate turns a handful of preferences (category, start time, budget,
//! location, duration, dress code and selected activities) into a short
//! schedule of suggested activities with descriptions and tips.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): plan requests, scheduled entries, itineraries
//!   and the closed option sets of the form
//! - **Catalog** ([`catalog`]): the activity list and category templates,
//!   built-in or loaded from JSON
//! - **Form** ([`form`]): session state with selection toggling, validation
//!   and reset
//! - **Planner** ([`planner`]): itinerary generation
//! - **Display** ([`display`]): markdown formatting shared by the CLI and
//!   the MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use evening_core::{PlanForm, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().builtin_only().build()?;
//!
//! let mut form = PlanForm::new();
//! form.category = "casual".to_string();
//! form.budget = "100".to_string();
//! form.location = "Downtown".to_string();
//! form.toggle_activity("coffee");
//! form.toggle_activity("movie");
//!
//! let itinerary = planner.generate(&form.submit()?)?;
//! println!("{}", itinerary);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{ActivityList, CategoryList, ClockTime, OperationStatus, Tips};
pub use error::{PlannerError, Result};
pub use form::PlanForm;
pub use models::{
    ActivityDefinition, Atmosphere, CategoryTemplate, DressCode, DurationBucket, Itinerary,
    PlanRequest, ScheduledEntry, Transportation,
};
pub use params::{CategoryId, PlanEvening};
pub use planner::{generate, Planner, PlannerBuilder};
