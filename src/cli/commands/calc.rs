use crate::RunOptions;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::schedule::Schedule;
use crate::ui::messages::{detail, info};
use crate::ui::report::render;
use crate::utils::format_hours;
use crate::utils::formatting::delta_to_hours;
use crate::utils::time::format_clock;
use std::io::{self, Write};

/// Compute the schedule and print the single result line.
pub fn handle(woke_up: &str, min_wake_up: Option<&str>, opts: &RunOptions) -> AppResult<()> {
    //
    // 1. Parse + validate both arguments, then solve
    //
    let schedule = Core::plan(woke_up, min_wake_up, opts.now)?;

    //
    // 2. Optional breakdown on stderr
    //
    if opts.verbose {
        print_breakdown(&schedule, opts);
    }

    //
    // 3. Result line
    //
    let line = render(&schedule, opts.format)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;

    Ok(())
}

fn print_breakdown(s: &Schedule, opts: &RunOptions) {
    info(format!("Sleep model ({} output)", opts.format.as_str()));
    detail("now", s.now.format("%Y-%m-%d %H:%M"));
    detail("time awake (a)", format!("{}h", format_hours(delta_to_hours(s.time_awake))));
    detail("until sleep (x)", format!("{}h", format_hours(delta_to_hours(s.until_sleep))));
    detail("sleep needed (z)", format!("{}h", format_hours(delta_to_hours(s.sleep_needed))));
    detail("until wake (y)", format!("{}h", format_hours(delta_to_hours(s.until_wake))));
    detail("sleep at", format_clock(s.sleep_at));
    detail("wake at", format_clock(s.wake_at));
}
