//! The ephemeris provider contract consumed by the panchang engine.

use chrono::{DateTime, Utc};

use crate::error::EphemerisError;
use crate::riseset_types::{GeoLocation, RiseSetDirection};

/// Lunar illumination at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Moon minus Sun ecliptic longitude, degrees [0, 360).
    /// 0 is new moon, 180 is full moon.
    pub phase_angle_deg: f64,
    /// Illuminated fraction of the disk, [0, 1].
    pub phase_fraction: f64,
}

/// Source of Sun and Moon positions and solar horizon events.
///
/// Longitudes are apparent geocentric ecliptic longitudes of date, in
/// degrees [0, 360). Implementations must be deterministic: the same
/// inputs always give the same outputs.
pub trait Ephemeris {
    /// Sun's ecliptic longitude at `at`.
    fn sun_ecliptic_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Moon's ecliptic longitude at `at`.
    fn moon_ecliptic_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError>;

    /// Moon's phase angle and illuminated fraction at `at`.
    fn moon_illumination(&self, at: &DateTime<Utc>) -> Result<Illumination, EphemerisError>;

    /// First sunrise or sunset in `[start, start + window_days]`.
    ///
    /// `Ok(None)` when the Sun does not cross the horizon in the window.
    fn sun_rise_set(
        &self,
        direction: RiseSetDirection,
        location: &GeoLocation,
        start: &DateTime<Utc>,
        window_days: f64,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn sun_ecliptic_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).sun_ecliptic_longitude(at)
    }

    fn moon_ecliptic_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).moon_ecliptic_longitude(at)
    }

    fn moon_illumination(&self, at: &DateTime<Utc>) -> Result<Illumination, EphemerisError> {
        (**self).moon_illumination(at)
    }

    fn sun_rise_set(
        &self,
        direction: RiseSetDirection,
        location: &GeoLocation,
        start: &DateTime<Utc>,
        window_days: f64,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        (**self).sun_rise_set(direction, location, start, window_days)
    }
}
