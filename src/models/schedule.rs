use crate::utils::formatting::{delta_to_hours, round_hours};
use chrono::{NaiveDateTime, TimeDelta};

/// When to go to sleep, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepAt {
    /// Go to sleep right away.
    Now,
    /// Go to sleep at this instant.
    At(NaiveDateTime),
}

/// Result of the sleep model for one run.
///
/// Durations keep full precision; rounding only happens in the `hours_*`
/// accessors used for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub now: NaiveDateTime,
    /// `a`: time already awake.
    pub time_awake: TimeDelta,
    /// `x`: from now until going to sleep. May be negative.
    pub until_sleep: TimeDelta,
    /// `z`: length of the upcoming sleep. May be negative.
    pub sleep_needed: TimeDelta,
    /// `y`: from now until the next wake-up.
    pub until_wake: TimeDelta,
    pub sleep_at: NaiveDateTime,
    pub wake_at: NaiveDateTime,
}

impl Schedule {
    pub fn hours_until_sleep(&self) -> f64 {
        round_hours(delta_to_hours(self.until_sleep))
    }

    pub fn hours_sleep_needed(&self) -> f64 {
        round_hours(delta_to_hours(self.sleep_needed))
    }

    pub fn sleep_at_phrase(&self) -> SleepAt {
        if self.until_sleep.is_zero() {
            SleepAt::Now
        } else {
            SleepAt::At(self.sleep_at)
        }
    }
}
