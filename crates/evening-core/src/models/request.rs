//! The immutable input of one planning action.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{Atmosphere, DressCode, DurationBucket, Transportation};

/// A user's submitted choices, created fresh for every planning action.
///
/// `activities` holds ids in selection order without duplicates. Requests
/// built through [`crate::PlanForm::submit`] are already validated; requests
/// built by hand are accepted as-is by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Category identifier, e.g. `casual`
    pub category: String,

    /// Local wall-clock start of the first activity
    pub start: DateTime,

    /// Total budget for the evening
    pub budget: f64,

    /// Free-text location
    pub location: String,

    #[serde(default)]
    pub atmosphere: Atmosphere,

    #[serde(default)]
    pub transportation: Transportation,

    #[serde(default)]
    pub duration: DurationBucket,

    #[serde(default)]
    pub dress_code: DressCode,

    /// Selected activity ids, in selection order
    #[serde(default)]
    pub activities: Vec<String>,
}
