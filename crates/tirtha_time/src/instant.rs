//! Conversion of a civil date into the single instant at which the
//! panchang is evaluated.
//!
//! Sun and Moon longitudes change continuously through the day (the Moon
//! by about half a degree per hour), so a date alone does not determine a
//! Tithi or Nakshatra. Every computation for a date goes through
//! [`EvaluationInstant::resolve`] so the choice is made in exactly one place.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::TimeError;

/// Indian Standard Time, UTC+05:30, in minutes.
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Largest accepted UTC offset magnitude in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Time-of-day convention used to evaluate a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluationInstant {
    /// 00:00 at the configured UTC offset.
    LocalMidnight,
    /// 12:00 at the configured UTC offset.
    #[default]
    LocalNoon,
    /// 00:00 UTC.
    UtcMidnight,
    /// 12:00 UTC.
    UtcNoon,
}

impl EvaluationInstant {
    /// All conventions, in declaration order.
    pub const ALL: [EvaluationInstant; 4] = [
        Self::LocalMidnight,
        Self::LocalNoon,
        Self::UtcMidnight,
        Self::UtcNoon,
    ];

    /// Stable kebab-case name, accepted back by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LocalMidnight => "local-midnight",
            Self::LocalNoon => "local-noon",
            Self::UtcMidnight => "utc-midnight",
            Self::UtcNoon => "utc-noon",
        }
    }

    /// The UTC instant this convention assigns to `date`.
    pub fn resolve(self, date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, TimeError> {
        match self {
            Self::LocalMidnight => local_instant(date, NaiveTime::MIN, offset),
            Self::LocalNoon => local_instant(date, noon(), offset),
            Self::UtcMidnight => Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
            Self::UtcNoon => Ok(Utc.from_utc_datetime(&date.and_time(noon()))),
        }
    }
}

impl Display for EvaluationInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvaluationInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| TimeError::Parse(format!("unknown evaluation instant: {s}")))
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn local_instant(
    date: NaiveDate,
    time: NaiveTime,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, TimeError> {
    offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .map(|t| t.with_timezone(&Utc))
        .ok_or_else(|| TimeError::InvalidDate(format!("{date} {time} at {offset}")))
}

/// Start of the civil day `date` at `offset`, as a UTC instant.
pub fn local_day_start(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, TimeError> {
    local_instant(date, NaiveTime::MIN, offset)
}

/// Build a fixed UTC offset from minutes east of Greenwich.
pub fn utc_offset(minutes: i32) -> Result<FixedOffset, TimeError> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(TimeError::InvalidOffset(minutes));
    }
    FixedOffset::east_opt(minutes * 60).ok_or(TimeError::InvalidOffset(minutes))
}
