//! Analytic Sun/Moon ephemeris needing no data files.

use chrono::{DateTime, Utc};
use log::trace;
use tirtha_time::{jd_from_utc, utc_from_jd};

use crate::error::EphemerisError;
use crate::lunar::{moon_illuminated_fraction, moon_longitude_deg};
use crate::provider::{Ephemeris, Illumination};
use crate::riseset::search_rise_set;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetDirection};
use crate::solar::sun_position;

/// [`Ephemeris`] backed by the truncated solar and lunar series.
///
/// Stateless apart from the rise/set parameters; safe to share across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LowPrecisionEphemeris {
    rise_set: RiseSetConfig,
}

impl LowPrecisionEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom refraction/semidiameter/dip settings for horizon events.
    pub fn with_rise_set_config(rise_set: RiseSetConfig) -> Result<Self, EphemerisError> {
        rise_set.validate().map_err(EphemerisError::InvalidConfig)?;
        Ok(Self { rise_set })
    }

    pub fn rise_set_config(&self) -> &RiseSetConfig {
        &self.rise_set
    }
}

impl Ephemeris for LowPrecisionEphemeris {
    fn sun_ecliptic_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(sun_position(jd_from_utc(at)).longitude_deg)
    }

    fn moon_ecliptic_longitude(&self, at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        Ok(moon_longitude_deg(jd_from_utc(at)))
    }

    fn moon_illumination(&self, at: &DateTime<Utc>) -> Result<Illumination, EphemerisError> {
        let jd = jd_from_utc(at);
        let elongation = moon_longitude_deg(jd) - sun_position(jd).longitude_deg;
        Ok(Illumination {
            phase_angle_deg: elongation.rem_euclid(360.0),
            phase_fraction: moon_illuminated_fraction(jd),
        })
    }

    fn sun_rise_set(
        &self,
        direction: RiseSetDirection,
        location: &GeoLocation,
        start: &DateTime<Utc>,
        window_days: f64,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        let start_jd = jd_from_utc(start);
        let found = search_rise_set(location, direction, start_jd, window_days, &self.rise_set)?;
        trace!("sun {direction:?} search from JD {start_jd:.5}: {found:?}");
        found.map(utc_from_jd).transpose().map_err(EphemerisError::from)
    }
}
