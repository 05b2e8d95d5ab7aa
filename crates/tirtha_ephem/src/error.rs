//! Error types for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tirtha_time::TimeError;

/// Errors from an ephemeris provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Rise/set search window was non-positive or not finite.
    InvalidSearchWindow(f64),
    /// Rise/set parameters out of range.
    InvalidConfig(&'static str),
    /// Error from time conversion.
    Time(TimeError),
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidSearchWindow(days) => {
                write!(f, "invalid search window: {days} days")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
