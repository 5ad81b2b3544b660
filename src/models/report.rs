use crate::models::schedule::{Schedule, SleepAt};
use crate::utils::time::format_clock;
use serde::Serialize;

/// Flat view of a [`Schedule`] for machine-readable output.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScheduleReport {
    pub sleep_at: String,
    pub wake_at: String,
    pub hours_until_sleep: f64,
    pub hours_sleep_needed: f64,
}

impl From<&Schedule> for ScheduleReport {
    fn from(s: &Schedule) -> Self {
        let sleep_at = match s.sleep_at_phrase() {
            SleepAt::Now => "NOW".to_string(),
            SleepAt::At(t) => format_clock(t),
        };

        Self {
            sleep_at,
            wake_at: format_clock(s.wake_at),
            hours_until_sleep: s.hours_until_sleep(),
            hours_sleep_needed: s.hours_sleep_needed(),
        }
    }
}
