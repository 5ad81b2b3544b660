use crate::core::calculator::schedule::compute_schedule;
use crate::errors::AppResult;
use crate::models::schedule::Schedule;
use crate::utils::time::{resolve_wake_time, resolve_woke_time};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Resolve both raw arguments against `now`, then run the sleep model.
    /// Both arguments are validated before anything is computed.
    pub fn plan(woke_raw: &str, wake_raw: Option<&str>, now: NaiveDateTime) -> AppResult<Schedule> {
        let woke = resolve_woke_time(woke_raw, now)?;
        let wake = wake_raw
            .map(|raw| resolve_wake_time(raw, now))
            .transpose()?;

        Ok(compute_schedule(woke, now, wake))
    }
}
