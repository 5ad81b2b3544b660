use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid HH:mm regex"));

/// A wall-clock `HH:mm` read from the command line.
///
/// Invariant: `hour < 24` and `minute < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour >= 24 {
            return Err(AppError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(AppError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a strict `HH:mm` string (two ASCII digits on each side).
    pub fn parse(raw: &str) -> AppResult<Self> {
        if !HHMM.is_match(raw) {
            return Err(AppError::InvalidTimeFormat(raw.to_string()));
        }

        let (h, m) = raw
            .split_once(':')
            .ok_or_else(|| AppError::InvalidTimeFormat(raw.to_string()))?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| AppError::InvalidTimeFormat(raw.to_string()))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| AppError::InvalidTimeFormat(raw.to_string()))?;

        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Same calendar date as `reference`, with the clock replaced by this
    /// time of day and seconds zeroed.
    pub fn on(&self, reference: NaiveDateTime) -> NaiveDateTime {
        reference.date().and_time(self.as_naive_time())
    }

    fn as_naive_time(&self) -> NaiveTime {
        // hour/minute are range checked on construction
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
