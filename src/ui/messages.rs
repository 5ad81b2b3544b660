//! Terminal diagnostics. Everything here goes to stderr so stdout only ever
//! carries the result line.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Aligned `label: value` line, dimmed label.
pub fn detail<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    eprintln!(
        "   {} {}",
        Colour::Fixed(244).paint(format!("{:<18}", format!("{label}:"))),
        value
    );
}
