//! Error types for date and time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion, offset handling, or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A civil date/time could not be represented (e.g. Feb 30).
    InvalidDate(String),
    /// UTC offset outside ±18 hours.
    InvalidOffset(i32),
    /// Julian Date outside the range representable by `chrono`.
    OutOfRange(f64),
    /// Text could not be parsed into a time-related value.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidOffset(minutes) => {
                write!(f, "invalid UTC offset: {minutes} minutes (must be within ±1080)")
            }
            Self::OutOfRange(jd) => write!(f, "Julian Date {jd} is out of range"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
