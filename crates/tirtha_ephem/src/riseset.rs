//! Sunrise/sunset by iterated hour-angle refinement.
//!
//! For one UT day: estimate local transit from approximate local noon,
//! offset by the hour angle at which the Sun's centre reaches the horizon
//! depression, then correct using sidereal time and the Sun's position at
//! the current estimate until the step falls below a tenth of a second.

use tirtha_time::{SIDEREAL_DEG_PER_DAY, gmst_deg, jd_midnight_floor, local_sidereal_time_deg};

use crate::error::EphemerisError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetDirection, RiseSetResult};
use crate::solar::sun_position;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Wrap an angle in degrees to (-180, 180].
fn signed_deg(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 { a - 360.0 } else { a }
}

/// Cosine of the hour angle at which the Sun's centre sits `h0_deg` above
/// the horizon. Outside [-1, 1] the Sun never reaches that altitude.
fn cos_hour_angle(h0_deg: f64, latitude_deg: f64, declination_deg: f64) -> f64 {
    let h0 = h0_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

fn polar_result(cos_h: f64) -> Option<RiseSetResult> {
    if cos_h > 1.0 {
        Some(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Some(RiseSetResult::NeverSets)
    } else {
        None
    }
}

/// Compute one sunrise or sunset near the given approximate local noon.
///
/// * `jd_ut_noon`: approximate local noon (UT JD), see [`approximate_local_noon_jd`].
///
/// Returns `NeverRises`/`NeverSets` when the Sun stays below/above the
/// horizon depression for the whole day.
pub fn compute_rise_set(
    location: &GeoLocation,
    direction: RiseSetDirection,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemerisError> {
    location.validate()?;
    let h0_deg = -config.horizon_depression_deg(location.altitude_m);

    let noon = sun_position(jd_ut_noon);
    let cos_h0 = cos_hour_angle(h0_deg, location.latitude_deg, noon.declination_deg);
    if let Some(polar) = polar_result(cos_h0) {
        return Ok(polar);
    }
    let h0 = cos_h0.acos().to_degrees();

    let lst_noon = local_sidereal_time_deg(gmst_deg(jd_ut_noon), location.longitude_deg);
    let ha_noon = signed_deg(lst_noon - noon.right_ascension_deg);
    let jd_transit = jd_ut_noon - ha_noon / SIDEREAL_DEG_PER_DAY;

    let h0_days = h0 / SIDEREAL_DEG_PER_DAY;
    let mut jd_event = if direction.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let sun = sun_position(jd_event);
        let cos_h = cos_hour_angle(h0_deg, location.latitude_deg, sun.declination_deg);
        if let Some(polar) = polar_result(cos_h) {
            return Ok(polar);
        }
        let h_target = cos_h.acos().to_degrees();
        let ha_target = if direction.is_rising() { -h_target } else { h_target };

        let lst = local_sidereal_time_deg(gmst_deg(jd_event), location.longitude_deg);
        let ha_actual = signed_deg(lst - sun.right_ascension_deg);

        let correction = signed_deg(ha_target - ha_actual) / SIDEREAL_DEG_PER_DAY;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            return Ok(RiseSetResult::Event {
                jd_ut: jd_event,
                direction,
            });
        }
    }

    Err(EphemerisError::NoConvergence("sun rise/set refinement"))
}

/// First sunrise or sunset in `[start_jd, start_jd + window_days]`.
///
/// Each UT day overlapping the window (plus one either side, so events
/// belonging to a neighbouring local date are not missed) is solved
/// independently and the earliest event inside the window wins.
/// `Ok(None)` when no such event exists, e.g. in polar night or day.
pub fn search_rise_set(
    location: &GeoLocation,
    direction: RiseSetDirection,
    start_jd: f64,
    window_days: f64,
    config: &RiseSetConfig,
) -> Result<Option<f64>, EphemerisError> {
    if !window_days.is_finite() || window_days <= 0.0 {
        return Err(EphemerisError::InvalidSearchWindow(window_days));
    }
    let end_jd = start_jd + window_days;

    let mut best: Option<f64> = None;
    let mut day = jd_midnight_floor(start_jd) - 1.0;
    while day <= jd_midnight_floor(end_jd) + 1.0 {
        let noon = approximate_local_noon_jd(day, location.longitude_deg);
        let result = compute_rise_set(location, direction, noon, config)?;
        if let Some(jd) = result.jd_ut() {
            if (start_jd..=end_jd).contains(&jd) && best.is_none_or(|b| jd < b) {
                best = Some(jd);
            }
        }
        day += 1.0;
    }
    Ok(best)
}
