//! The sleep model.
//!
//! With `a` the time already awake, `x` the wait before sleeping, `z` the
//! sleep length and `y` the time until the next wake-up:
//!
//! ```text
//! y = x + z
//! z = (a + x) / 2
//! ```
//!
//! Without a target wake-up time the user sleeps now (`x = 0`). With one,
//! `y` is fixed and `x = (2y - a) / 3`. Results are never clamped.

use crate::models::schedule::Schedule;
use chrono::{NaiveDateTime, TimeDelta};

/// Time awake at `now`, given the wake-up instant.
pub fn time_awake(woke: NaiveDateTime, now: NaiveDateTime) -> TimeDelta {
    now - woke
}

pub fn compute_schedule(
    woke: NaiveDateTime,
    now: NaiveDateTime,
    wake: Option<NaiveDateTime>,
) -> Schedule {
    let a = time_awake(woke, now);

    let (x, z, y) = match wake {
        None => {
            let z = a / 2;
            (TimeDelta::zero(), z, z)
        }
        Some(target) => {
            let y = target - now;
            let x = (y * 2 - a) / 3;
            let z = (a + x) / 2;
            (x, z, y)
        }
    };

    let sleep_at = now + x;
    let wake_at = sleep_at + z;

    Schedule {
        now,
        time_awake: a,
        until_sleep: x,
        sleep_needed: z,
        until_wake: y,
        sleep_at,
        wake_at,
    }
}
