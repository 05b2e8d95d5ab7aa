//! Apparent ecliptic longitude and phase of the Moon.
//!
//! Truncated ELP-2000/82 periodic series for longitude (Meeus,
//! *Astronomical Algorithms*, ch. 47, the largest terms of table 47.A) and
//! the approximate phase angle of ch. 48. Longitude error stays below about
//! 0.01 deg, small against the 13.3 deg Nakshatra sector.

use tirtha_time::centuries_since_j2000;

use crate::solar::moon_node_deg;

/// Fundamental lunar arguments in degrees, not reduced.
#[derive(Debug, Clone, Copy)]
struct Arguments {
    /// Mean longitude of the Moon.
    l_prime: f64,
    /// Mean elongation of the Moon.
    d: f64,
    /// Sun's mean anomaly.
    m: f64,
    /// Moon's mean anomaly.
    m_prime: f64,
    /// Moon's argument of latitude.
    f: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            l_prime: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            m_prime: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
            f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Longitude terms: multiples of D, M, M', F and the sine coefficient in
/// units of 1e-6 deg.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 59] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
    (2, -2, -1, 0, 2_048.0),
    (2, 0, 1, -2, -1_773.0),
    (2, 0, 0, 2, -1_595.0),
    (4, -1, -1, 0, 1_215.0),
    (0, 0, 2, 2, -1_110.0),
    (3, 0, -1, 0, -892.0),
    (2, 1, 1, 0, -810.0),
    (4, -1, -2, 0, 759.0),
    (0, 2, -1, 0, -713.0),
    (2, 2, -1, 0, -700.0),
    (2, 1, -2, 0, 691.0),
    (2, -1, 0, -2, 596.0),
    (4, 0, 1, 0, 549.0),
    (0, 0, 4, 0, 537.0),
    (4, -1, 0, 0, 520.0),
    (1, 0, -2, 0, -487.0),
    (2, 1, 0, -2, -399.0),
    (0, 0, 2, -2, -381.0),
    (1, 1, 1, 0, 351.0),
    (3, 0, -2, 0, -340.0),
    (4, 0, -3, 0, 330.0),
    (2, -1, 2, 0, 327.0),
    (0, 2, 1, 0, -323.0),
    (1, 1, -1, 0, 299.0),
    (2, 0, 3, 0, 294.0),
];

/// Nutation in longitude in degrees, four-term approximation.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let omega = moon_node_deg(t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

/// Geometric ecliptic longitude of the Moon, mean equinox of date, degrees [0, 360).
pub fn moon_geometric_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let a = Arguments::at(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sigma = 0.0;
    for &(d, m, mp, f, coeff) in &LONGITUDE_TERMS {
        let arg = f64::from(d) * a.d + f64::from(m) * a.m + f64::from(mp) * a.m_prime
            + f64::from(f) * a.f;
        let scale = match m.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma += coeff * scale * arg.to_radians().sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sigma += 3958.0 * a1.sin()
        + 1962.0 * (a.l_prime - a.f).to_radians().sin()
        + 318.0 * a2.sin();

    (a.l_prime + sigma / 1_000_000.0).rem_euclid(360.0)
}

/// Apparent ecliptic longitude of the Moon, degrees [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    (moon_geometric_longitude_deg(jd) + nutation_longitude_deg(t)).rem_euclid(360.0)
}

/// Lunar phase angle (Sun-Moon-Earth) in degrees [0, 180].
///
/// 0 at full moon, 180 at new moon.
pub fn moon_phase_angle_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let a = Arguments::at(t);
    let d = a.d.to_radians();
    let m = a.m.to_radians();
    let mp = a.m_prime.to_radians();
    let i = 180.0 - a.d - 6.289 * mp.sin() + 2.100 * m.sin()
        - 1.274 * (2.0 * d - mp).sin()
        - 0.658 * (2.0 * d).sin()
        - 0.214 * (2.0 * mp).sin()
        - 0.110 * d.sin();
    let i = i.rem_euclid(360.0);
    if i > 180.0 { 360.0 - i } else { i }
}

/// Illuminated fraction of the lunar disk, [0, 1].
pub fn moon_illuminated_fraction(jd: f64) -> f64 {
    let i = moon_phase_angle_deg(jd).to_radians();
    ((1.0 + i.cos()) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEEUS_47A_JD: f64 = 2_448_724.5;

    #[test]
    fn meeus_example_47a_longitude() {
        // 1992 April 12.0 TD: geometric 133.162655, apparent 133.167265
        let lon = moon_geometric_longitude_deg(MEEUS_47A_JD);
        assert!((lon - 133.162_655).abs() < 0.03, "lon = {lon}");
        let app = moon_longitude_deg(MEEUS_47A_JD);
        assert!((app - 133.167_265).abs() < 0.03, "apparent = {app}");
    }

    #[test]
    fn meeus_example_48a_fraction() {
        let k = moon_illuminated_fraction(MEEUS_47A_JD);
        assert!((k - 0.6786).abs() < 0.01, "k = {k}");
    }

    #[test]
    fn nutation_magnitude() {
        for t in [-1.0, -0.3, 0.0, 0.24, 1.0] {
            assert!(nutation_longitude_deg(t).abs() < 20.0 / 3600.0);
        }
    }

    #[test]
    fn phase_angle_range() {
        for k in 0..500 {
            let i = moon_phase_angle_deg(2_451_545.0 + k as f64 * 0.77);
            assert!((0.0..=180.0).contains(&i), "i = {i}");
        }
    }
}
