//! Economic event calendar records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How market-moving an event is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// One scheduled economic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub name: String,
    pub importance: Importance,
    /// Days until the event relative to the run date; 0 means today.
    pub days_until: i64,
}

impl CalendarEvent {
    /// "D-3" style countdown label, "today" when the event is on the run date.
    pub fn countdown(&self) -> String {
        if self.days_until > 0 {
            format!("D-{}", self.days_until)
        } else {
            "today".to_string()
        }
    }
}

/// Calendar sections for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomicCalendar {
    /// Fed decisions within the next 30 days.
    pub upcoming_fed: Vec<CalendarEvent>,
    /// Estimated US releases within the current week.
    pub this_week: Vec<CalendarEvent>,
}

impl EconomicCalendar {
    pub fn is_empty(&self) -> bool {
        self.upcoming_fed.is_empty() && self.this_week.is_empty()
    }
}
