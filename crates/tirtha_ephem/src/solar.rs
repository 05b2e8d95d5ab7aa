//! Low-accuracy apparent position of the Sun.
//!
//! Geometric mean longitude plus the equation of centre, corrected for
//! aberration and the dominant nutation term (Meeus, *Astronomical
//! Algorithms*, ch. 25). Good to about 0.01 deg, well inside one degree
//! of a 12 deg Tithi step.

use tirtha_time::centuries_since_j2000;

/// Apparent geocentric position of the Sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent ecliptic longitude of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Apparent right ascension, degrees [0, 360).
    pub right_ascension_deg: f64,
    /// Apparent declination, degrees.
    pub declination_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let seconds = 21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + seconds / 3600.0
}

/// Longitude of the Moon's mean ascending node in degrees (low accuracy).
pub(crate) fn moon_node_deg(t: f64) -> f64 {
    (125.04 - 1934.136 * t).rem_euclid(360.0)
}

/// Apparent position of the Sun at a Julian Date (UT used as TT).
pub fn sun_position(jd: f64) -> SunPosition {
    let t = centuries_since_j2000(jd);

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let anomaly = m + c.to_radians();
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * anomaly.cos());

    let omega = moon_node_deg(t).to_radians();
    let apparent = (true_lon - 0.005_69 - 0.004_78 * omega.sin()).rem_euclid(360.0);

    let eps = (mean_obliquity_deg(t) + 0.002_56 * omega.cos()).to_radians();
    let lambda = apparent.to_radians();
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();

    SunPosition {
        longitude_deg: apparent,
        right_ascension_deg: ra.to_degrees().rem_euclid(360.0),
        declination_deg: dec.to_degrees(),
        distance_au,
    }
}
