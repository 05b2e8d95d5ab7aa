//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// 0-based sector of `angle_deg` when the circle is cut into `count`
/// equal sectors starting at 0 deg. Always in `0..count`.
pub fn sector_index(angle_deg: f64, count: u8) -> u8 {
    let span = 360.0 / f64::from(count);
    let idx = (normalize_360(angle_deg) / span).floor() as u8;
    idx.min(count - 1)
}
