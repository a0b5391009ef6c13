//! Itinerary generation.

use jiff::{civil::DateTime, Span};
use log::debug;

use super::descriptions::describe_activity;
use crate::{
    catalog::Catalog,
    display::ClockTime,
    error::Result,
    models::{capitalize, Itinerary, PlanRequest, ScheduledEntry},
};

/// Hours between consecutive slots.
pub const SLOT_HOURS: i64 = 2;

/// Budget share for one entry: `budget / cap`, rounded half up.
///
/// The divisor is the duration cap even when fewer entries end up scheduled.
pub fn budget_share(budget: f64, cap: usize) -> i64 {
    (budget / cap as f64 + 0.5).floor() as i64
}

/// Start of slot `index` counted from `start`, as wall-clock arithmetic.
pub fn slot_time(start: DateTime, index: usize) -> Result<DateTime> {
    let hours = Span::new().try_hours(SLOT_HOURS * index as i64)?;
    Ok(start.checked_add(hours)?)
}

/// Builds the itinerary for a request.
///
/// Selected activities are taken in catalog order, capped by the duration
/// bucket, and placed two hours apart starting at `request.start`. An empty
/// selection yields an itinerary with no entries but the category's tips.
///
/// # Errors
///
/// Returns `PlannerError::UnknownCategory` if the catalog has no template for
/// `request.category`, and `PlannerError::InvalidDateTime` if a slot falls
/// outside the supported date range.
///
/// # Examples
///
/// ```rust
/// use evening_core::{catalog::Catalog, models::*, planner::generate};
/// use jiff::civil::date;
///
/// let request = PlanRequest {
///     category: "casual".to_string(),
///     start: date(2024, 1, 2).at(19, 0, 0, 0),
///     budget: 100.0,
///     location: "Downtown".to_string(),
///     atmosphere: Atmosphere::default(),
///     transportation: Transportation::default(),
///     duration: DurationBucket::Short,
///     dress_code: DressCode::Casual,
///     activities: vec!["coffee".into(), "movie".into(), "park".into()],
/// };
///
/// let itinerary = generate(&request, &Catalog::builtin()).unwrap();
/// assert_eq!(itinerary.entries.len(), 2);
/// assert_eq!(itinerary.entries[1].time_label, "9:00 PM");
/// ```
pub fn generate(request: &PlanRequest, catalog: &Catalog) -> Result<Itinerary> {
    let tips = catalog.tips(&request.category)?.to_vec();
    let cap = request.duration.activity_cap();
    let share = budget_share(request.budget, cap);
    let dress_code = capitalize(request.dress_code.as_str());

    let entries = catalog
        .select(&request.activities)
        .take(cap)
        .enumerate()
        .map(|(index, activity)| {
            let time = slot_time(request.start, index)?;
            Ok(ScheduledEntry {
                time,
                time_label: ClockTime(&time).to_string(),
                activity_id: activity.id.clone(),
                icon: activity.icon.clone(),
                label: activity.label.clone(),
                description: describe_activity(&activity.id, &request.category).into_owned(),
                location: request.location.clone(),
                budget: share,
                dress_code: dress_code.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Generated {} of {} selected activities for '{}' (cap {})",
        entries.len(),
        request.activities.len(),
        request.category,
        cap
    );

    Ok(Itinerary {
        category: request.category.clone(),
        entries,
        tips,
    })
}
