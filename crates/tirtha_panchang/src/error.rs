//! Error types for panchang computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tirtha_ephem::EphemerisError;
use tirtha_time::TimeError;

/// Errors from panchang computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Observer latitude/longitude/altitude out of range.
    InvalidLocation(&'static str),
    /// Civil date could not be mapped to an instant.
    InvalidDate(String),
    /// Configuration value out of range.
    InvalidConfig(&'static str),
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Ephemeris returned NaN or infinity for the named quantity.
    NonFiniteValue(&'static str),
    /// Error from time conversion.
    Time(TimeError),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::NonFiniteValue(what) => write!(f, "ephemeris returned non-finite {what}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for PanchangError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for PanchangError {
    fn from(e: EphemerisError) -> Self {
        match e {
            EphemerisError::InvalidLocation(msg) => Self::InvalidLocation(msg),
            other => Self::Ephemeris(other),
        }
    }
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(msg) => Self::InvalidDate(msg),
            other => Self::Time(other),
        }
    }
}
