//! Unified application error type.
//! Parser, solver and output code all return AppError so that `main`
//! has a single place where a failed run is reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Usage
    // ---------------------------
    #[error("Usage: sleepcalc <woke-up-time> [min-wake-up-time]")]
    Usage,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("{0} is of incorrect format. Must be 'HH:mm'.")]
    InvalidTimeFormat(String),

    #[error("Hours cannot be greater than or equal to 24 or less than 0 (got {0}).")]
    HourOutOfRange(u32),

    #[error("Minutes cannot be greater than or equal to 60 or less than 0 (got {0}).")]
    MinuteOutOfRange(u32),

    #[error("Invalid reference time: {0}. Must be 'YYYY-MM-DD HH:mm'.")]
    InvalidNow(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
