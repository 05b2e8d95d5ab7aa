//! Greenwich and local mean sidereal time.
//!
//! GMST from the IAU 1982 expression in days and centuries of UT since
//! J2000.0 (Meeus, *Astronomical Algorithms*, eq. 12.4). Accurate to a
//! fraction of a second of time over several centuries, which is ample for
//! sunrise and sunset.

use crate::julian::{J2000_JD, centuries_since_j2000};

/// Mean sidereal rotation rate in degrees per solar day.
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich Mean Sidereal Time in degrees [0, 360) at a UT Julian Date.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = centuries_since_j2000(jd_ut);
    let theta = 280.460_618_37 + SIDEREAL_DEG_PER_DAY * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time in degrees [0, 360), east longitude positive.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000() {
        assert!((gmst_deg(J2000_JD) - 280.460_618_37).abs() < 1e-9);
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST = 13h10m46.3668s = 197.693195 deg
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "gmst = {g}");
    }

    #[test]
    fn lst_wraps() {
        assert!((local_sidereal_time_deg(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }
}
