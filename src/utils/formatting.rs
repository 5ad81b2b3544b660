//! Formatting utilities used for the result line.

use chrono::TimeDelta;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Fractional hours in a duration, at millisecond precision.
pub fn delta_to_hours(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / MS_PER_HOUR
}

/// Round to 2 decimals, halves going up (toward +inf).
pub fn round_hours(hours: f64) -> f64 {
    let r = (hours * 100.0 + 0.5).floor() / 100.0;
    // collapse -0.0
    if r == 0.0 { 0.0 } else { r }
}

/// Shortest decimal rendering of a rounded hour count: `1`, `0.33`, `7.67`.
pub fn format_hours(hours: f64) -> String {
    format!("{}", round_hours(hours))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_hours(1.0 / 3.0), 0.33);
        assert_eq!(round_hours(23.0 / 3.0), 7.67);
        assert_eq!(round_hours(2.0), 2.0);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_hours(0.125), 0.13);
        assert_eq!(round_hours(-0.125), -0.12);
    }

    #[test]
    fn negative_zero_collapses() {
        assert_eq!(format_hours(-0.001), "0");
    }

    #[test]
    fn renders_shortest_form() {
        assert_eq!(format_hours(1.0), "1");
        assert_eq!(format_hours(0.5), "0.5");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
        assert_eq!(format_hours(-1.5), "-1.5");
    }

    #[test]
    fn converts_deltas() {
        assert_eq!(delta_to_hours(TimeDelta::minutes(90)), 1.5);
        assert_eq!(delta_to_hours(TimeDelta::minutes(-30)), -0.5);
    }
}
