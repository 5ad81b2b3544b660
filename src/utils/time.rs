//! Time utilities: turning HH:mm arguments into instants relative to "now",
//! sampling the clock and formatting instants.

use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

/// Sample the local wall clock, truncated to minute precision.
///
/// Call this once per run and pass the result around.
pub fn capture_now() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Parse the `--now` override (`YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`).
pub fn parse_now_override(raw: &str) -> AppResult<NaiveDateTime> {
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
        .ok_or_else(|| AppError::InvalidNow(raw.to_string()))
}

/// Parse `raw` as `HH:mm` on the same calendar date as `now`.
///
/// No day rollover is applied here; see [`resolve_woke_time`] and
/// [`resolve_wake_time`].
pub fn parse_time_arg(raw: &str, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    Ok(TimeOfDay::parse(raw)?.on(now))
}

/// The instant the user woke up. Never after `now`: a clock time later than
/// now's refers to yesterday.
pub fn resolve_woke_time(raw: &str, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    let woke = parse_time_arg(raw, now)?;
    if woke > now {
        Ok(woke - TimeDelta::days(1))
    } else {
        Ok(woke)
    }
}

/// The earliest instant the user wants to wake up. Never before `now`: a
/// clock time earlier than now's refers to tomorrow.
pub fn resolve_wake_time(raw: &str, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    let wake = parse_time_arg(raw, now)?;
    if wake < now {
        Ok(wake + TimeDelta::days(1))
    } else {
        Ok(wake)
    }
}

/// Render an instant as `HH:mm`.
pub fn format_clock(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}
