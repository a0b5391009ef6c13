//! Data models for catalogs, plan requests and itineraries.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use evening_core::models::DurationBucket;
//!
//! assert_eq!(DurationBucket::FullDay.activity_cap(), 3);
//! assert_eq!(DurationBucket::default().activity_cap(), 2);
//! ```

pub mod activity;
pub mod category;
pub mod itinerary;
pub mod options;
pub mod request;


pub use activity::ActivityDefinition;
pub use category::{capitalize, category_title, CategoryTemplate};
pub use itinerary::{Itinerary, ScheduledEntry};
pub use options::{Atmosphere, DressCode, DurationBucket, Transportation};
pub use request::PlanRequest;
