//! Time support for the tirtha panchang engine.
//!
//! This crate provides:
//! - Julian Date ↔ `chrono` UTC conversions
//! - Greenwich/local mean sidereal time
//! - The evaluation-instant convention that maps a civil date to one instant
//! - 12-hour clock formatting used in panchang output

pub mod clock;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use clock::{format_clock_12h, format_decimal_hour};
pub use error::TimeError;
pub use instant::{
    EvaluationInstant, IST_OFFSET_MINUTES, MAX_OFFSET_MINUTES, local_day_start, utc_offset,
};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, centuries_since_j2000,
    jd_from_utc, jd_midnight_floor, utc_from_jd,
};
pub use sidereal::{SIDEREAL_DEG_PER_DAY, gmst_deg, local_sidereal_time_deg};
