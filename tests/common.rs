#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn sleepcalc() -> Command {
    cargo_bin_cmd!("sleepcalc")
}

/// Command with the reference instant pinned to `now` (`YYYY-MM-DD HH:MM`).
pub fn sleepcalc_at(now: &str) -> Command {
    let mut cmd = sleepcalc();
    cmd.args(["--now", now]);
    cmd
}
