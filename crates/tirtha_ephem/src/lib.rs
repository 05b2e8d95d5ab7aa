//! Ephemeris provider for the tirtha panchang engine.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: Sun/Moon ecliptic longitude, lunar
//!   illumination and sunrise/sunset search
//! - Observer location and rise/set configuration types
//! - [`LowPrecisionEphemeris`], an analytic implementation from truncated
//!   solar and lunar series that needs no kernel files

pub mod error;
pub mod low_precision;
pub mod lunar;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod solar;

pub use error::EphemerisError;
pub use low_precision::LowPrecisionEphemeris;
pub use lunar::{
    moon_geometric_longitude_deg, moon_illuminated_fraction, moon_longitude_deg,
    moon_phase_angle_deg, nutation_longitude_deg,
};
pub use provider::{Ephemeris, Illumination};
pub use riseset::{approximate_local_noon_jd, compute_rise_set, search_rise_set};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetDirection, RiseSetResult};
pub use solar::{SunPosition, mean_obliquity_deg, sun_position};
