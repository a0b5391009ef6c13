//! The planning form: session state owned by an interface.
//!
//! A [`PlanForm`] holds what the user has entered so far, including the
//! mutable set of selected activities. Submitting it validates presence of
//! the required fields and produces an immutable [`PlanRequest`]; a failed
//! submission leaves the form untouched so the user can correct it.

use jiff::{
    civil::{Date, DateTime},
    Zoned,
};
use log::debug;

use crate::{
    error::{PlannerError, Result},
    models::{Atmosphere, DressCode, DurationBucket, PlanRequest, Transportation},
    params::PlanEvening,
};

/// Category selected on a fresh form.
pub const DEFAULT_CATEGORY: &str = "first-date";

/// Hour of the default start time, on the day after today.
pub const DEFAULT_START_HOUR: i8 = 19;

/// Default start time for a form opened on `today`: tomorrow at 19:00.
pub fn default_start(today: Date) -> DateTime {
    today
        .tomorrow()
        .unwrap_or(today)
        .at(DEFAULT_START_HOUR, 0, 0, 0)
}

/// Form state for one planning session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanForm {
    today: Date,
    pub category: String,
    pub start: DateTime,
    /// Budget as typed; parsed on submit
    pub budget: String,
    pub location: String,
    pub atmosphere: Atmosphere,
    pub transportation: Transportation,
    pub duration: DurationBucket,
    pub dress_code: DressCode,
    selected: Vec<String>,
}

impl PlanForm {
    /// Creates a form with the documented defaults, relative to the current
    /// local date.
    pub fn new() -> Self {
        Self::with_today(Zoned::now().date())
    }

    /// Creates a form with the documented defaults, relative to `today`.
    pub fn with_today(today: Date) -> Self {
        Self {
            today,
            category: DEFAULT_CATEGORY.to_string(),
            start: default_start(today),
            budget: String::new(),
            location: String::new(),
            atmosphere: Atmosphere::default(),
            transportation: Transportation::default(),
            duration: DurationBucket::default(),
            dress_code: DressCode::default(),
            selected: Vec::new(),
        }
    }

    /// Selected activity ids, in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Whether an activity is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Selects the activity if it is not selected, deselects it otherwise.
    ///
    /// Returns whether the activity is selected afterwards.
    pub fn toggle_activity(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(id.to_string());
            true
        }
    }

    /// Restores every field to its default and clears the selection.
    pub fn reset(&mut self) {
        *self = Self::with_today(self.today);
    }

    /// Validates the form and produces a plan request.
    ///
    /// # Errors
    ///
    /// - `PlannerError::MissingField` if budget or location is blank
    /// - `PlannerError::InvalidInput` if the budget is not a number
    /// - `PlannerError::NoActivitiesSelected` if nothing is selected
    pub fn submit(&self) -> Result<PlanRequest> {
        let mut missing = Vec::new();
        if self.budget.trim().is_empty() {
            missing.push("budget");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if !missing.is_empty() {
            return Err(PlannerError::MissingField { fields: missing });
        }

        let budget = self
            .budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite())
            .ok_or_else(|| {
                PlannerError::invalid_input("budget")
                    .with_reason(format!("'{}' is not a number", self.budget.trim()))
            })?;

        if self.selected.is_empty() {
            return Err(PlannerError::NoActivitiesSelected);
        }

        Ok(PlanRequest {
            category: self.category.clone(),
            start: self.start,
            budget,
            location: self.location.trim().to_string(),
            atmosphere: self.atmosphere,
            transportation: self.transportation,
            duration: self.duration,
            dress_code: self.dress_code,
            activities: self.selected.clone(),
        })
    }
}

impl Default for PlanForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&PlanEvening> for PlanForm {
    type Error = PlannerError;

    fn try_from(params: &PlanEvening) -> Result<Self> {
        let mut form = PlanForm::new();
        form.category = params.category.clone();

        if let Some(start) = &params.start {
            form.start = start.trim().parse::<DateTime>().map_err(|e| {
                PlannerError::invalid_input("start")
                    .with_reason(format!("'{start}' is not a local date-time: {e}"))
            })?;
        }
        if let Some(budget) = &params.budget {
            form.budget = budget.clone();
        }
        if let Some(location) = &params.location {
            form.location = location.clone();
        }
        if let Some(atmosphere) = params.atmosphere {
            form.atmosphere = atmosphere;
        }
        if let Some(transportation) = params.transportation {
            form.transportation = transportation;
        }
        if let Some(duration) = params.duration {
            form.duration = duration;
        }
        if let Some(dress_code) = params.dress_code {
            form.dress_code = dress_code;
        }

        for id in &params.activities {
            let selected = form.toggle_activity(id);
            debug!("Toggled '{id}' (selected: {selected})");
        }

        Ok(form)
    }
}
