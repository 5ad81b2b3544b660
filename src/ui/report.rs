use crate::errors::AppResult;
use crate::models::report::ScheduleReport;
use crate::models::schedule::{Schedule, SleepAt};
use crate::utils::formatting::format_hours;
use crate::utils::time::format_clock;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// `NOW` or `at HH:mm (in H.HHh)`.
pub fn sleep_at_phrase(schedule: &Schedule) -> String {
    match schedule.sleep_at_phrase() {
        SleepAt::Now => "NOW".to_string(),
        SleepAt::At(t) => format!(
            "at {} (in {}h)",
            format_clock(t),
            format_hours(schedule.hours_until_sleep())
        ),
    }
}

pub fn render_text(schedule: &Schedule) -> String {
    format!(
        "If you go to sleep {} you can wake up at {} fully refreshed after {}h of sleep.",
        sleep_at_phrase(schedule),
        format_clock(schedule.wake_at),
        format_hours(schedule.hours_sleep_needed())
    )
}

pub fn render_json(schedule: &Schedule) -> AppResult<String> {
    Ok(serde_json::to_string(&ScheduleReport::from(schedule))?)
}

/// The single result line for `format`.
pub fn render(schedule: &Schedule, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(schedule)),
        OutputFormat::Json => render_json(schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::schedule::compute_schedule;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn text_line_when_sleeping_now() {
        let s = compute_schedule(dt(14, 6, 0), dt(14, 8, 0), None);
        assert_eq!(
            render_text(&s),
            "If you go to sleep NOW you can wake up at 09:00 fully refreshed after 1h of sleep."
        );
    }

    #[test]
    fn text_line_with_target() {
        let s = compute_schedule(dt(14, 7, 0), dt(14, 22, 0), Some(dt(15, 6, 0)));
        assert_eq!(
            render_text(&s),
            "If you go to sleep at 22:20 (in 0.33h) you can wake up at 06:00 fully refreshed after 7.67h of sleep."
        );
    }

    #[test]
    fn text_line_keeps_negative_hours() {
        let s = compute_schedule(dt(14, 7, 0), dt(14, 22, 0), Some(dt(14, 23, 0)));
        assert_eq!(
            render_text(&s),
            "If you go to sleep at 17:40 (in -4.33h) you can wake up at 23:00 fully refreshed after 5.33h of sleep."
        );
    }

    #[test]
    fn json_line() {
        let s = compute_schedule(dt(14, 7, 0), dt(14, 22, 0), Some(dt(15, 6, 0)));
        let line = render(&s, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(v["sleep_at"], "22:20");
        assert_eq!(v["wake_at"], "06:00");
        assert_eq!(v["hours_until_sleep"], 0.33);
        assert_eq!(v["hours_sleep_needed"], 7.67);
    }

    #[test]
    fn json_uses_now_token() {
        let s = compute_schedule(dt(14, 6, 0), dt(14, 8, 0), None);
        let report = ScheduleReport::from(&s);
        assert_eq!(report.sleep_at, "NOW");
        assert_eq!(report.hours_until_sleep, 0.0);
    }
}
