//! Generated output: scheduled entries and tips.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// One activity placed into a time slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledEntry {
    /// Start of the slot (local wall-clock)
    pub time: DateTime,

    /// Slot start as shown to the user, e.g. `7:00 PM`
    pub time_label: String,

    pub activity_id: String,

    pub icon: String,

    pub label: String,

    /// One sentence describing the activity
    pub description: String,

    pub location: String,

    /// Budget share for this entry, in whole currency units
    pub budget: i64,

    /// Capitalized dress code, e.g. `Casual`
    pub dress_code: String,
}

/// Result of one planning action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Category the itinerary was generated for
    pub category: String,

    /// Scheduled entries in slot order
    pub entries: Vec<ScheduledEntry>,

    /// Category tips, verbatim and in declared order
    pub tips: Vec<String>,
}

impl Itinerary {
    /// Returns true when no activity could be scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
