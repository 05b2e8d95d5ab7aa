//! Observer, direction, configuration and result types for sunrise/sunset.

use std::f64::consts::PI;

use crate::error::EphemerisError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Chennai, default observer for the Tamil panchang.
    pub const CHENNAI: GeoLocation = GeoLocation {
        latitude_deg: 13.0827,
        longitude_deg: 80.2707,
        altitude_m: 0.0,
    };

    /// New Delhi, default observer for the North Indian panchang.
    pub const DELHI: GeoLocation = GeoLocation {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
        altitude_m: 0.0,
    };

    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Check that all coordinates are finite and within range.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be finite and within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be finite and within [-180, 180]",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Which horizon crossing of the Sun to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetDirection {
    /// Upper limb appears above the horizon.
    Rise,
    /// Upper limb disappears below the horizon.
    Set,
}

impl RiseSetDirection {
    /// Whether this is the morning event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.refraction_arcmin.is_finite() || self.refraction_arcmin < 0.0 {
            return Err("refraction_arcmin must be finite and non-negative");
        }
        if !self.semidiameter_arcmin.is_finite() || self.semidiameter_arcmin < 0.0 {
            return Err("semidiameter_arcmin must be finite and non-negative");
        }
        Ok(())
    }
}

/// Result of a single-day rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UT).
    Event {
        jd_ut: f64,
        direction: RiseSetDirection,
    },
    /// Sun never rises during this solar day (polar night).
    NeverRises,
    /// Sun never sets during this solar day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Event time, if one occurs.
    pub fn jd_ut(&self) -> Option<f64> {
        match self {
            Self::Event { jd_ut, .. } => Some(*jd_ut),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
