//! Display formatting wrappers.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here cover views that need context, such as listings over a
//! whole catalog or a clock-time rendering of a timestamp.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (Itinerary, ..) │───▶│ (ActivityList,  │───▶│    Output       │
//! │                 │    │  Tips, ..)      │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All formatters produce markdown for rich terminal display.
//!
//! # Examples
//!
//! ```rust
//! use evening_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Catalog written to catalog.json".to_string());
//! assert_eq!(status.to_string(), "Success: Catalog written to catalog.json\n");
//! ```

pub mod collections;
pub mod models;
pub mod status;
pub mod time;

pub use collections::{ActivityList, CategoryList, Tips};
pub use status::OperationStatus;
pub use time::ClockTime;
