pub mod formatting;
pub mod time;

pub use formatting::format_hours;
