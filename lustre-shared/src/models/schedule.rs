use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The dates and time slot the customer picked on the schedule step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub dates: Vec<NaiveDate>,
    pub time: Option<String>,
}

impl Schedule {
    pub fn merge(&mut self, patch: Schedule) {
        if !patch.dates.is_empty() {
            self.dates = patch.dates;
        }
        if patch.time.is_some() {
            self.time = patch.time;
        }
    }
}

/// One bookable window within a day, as supplied by the availability source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub available: bool,
}

/// A day's availability as consumed by the schedule step. The shape is the
/// contract with the scheduling collaborator; the generator behind it is
/// replaceable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub available: bool,
    pub time_slots: Vec<TimeSlot>,
}
