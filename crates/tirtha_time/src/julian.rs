//! Julian Date conversions for `chrono` instants.
//!
//! The panchang works at day granularity, so UT and TT are not
//! distinguished: ΔT (about 70 s today) moves the Moon by well under an
//! arcminute.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of a UTC instant.
pub fn jd_from_utc(at: &DateTime<Utc>) -> f64 {
    let seconds = at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// UTC instant of a Julian Date, rounded to the nearest nanosecond.
pub fn utc_from_jd(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let seconds = (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp(whole as i64, nanos).ok_or(TimeError::OutOfRange(jd))
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Date of 0h UT on the UTC calendar day containing `jd`.
pub fn jd_midnight_floor(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}
