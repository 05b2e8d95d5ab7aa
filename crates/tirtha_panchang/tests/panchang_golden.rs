//! Golden panchang values with the analytic ephemeris.
//!
//! Reference: new moon 2024-04-08 18:21 UTC, full moon 2024-04-23 23:49 UTC.
//! Sunrise/sunset reference times are rounded to the minute.

use chrono::NaiveDate;
use tirtha_panchang::{
    GeoLocation, LowPrecisionEphemeris, MoonPhase, PanchangConfig, Variant,
    compute_north_indian_panchang, compute_tamil_panchang, day_facts, search_special_days,
    tamil_panchang_with,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Minutes after midnight of an "hh:mm AM|PM" string.
fn clock_minutes(text: &str) -> i64 {
    let (hm, meridiem) = text.split_once(' ').unwrap();
    let (h, m) = hm.split_once(':').unwrap();
    let h: i64 = h.parse().unwrap();
    let m: i64 = m.parse().unwrap();
    let h24 = match (meridiem, h) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        ("PM", h) => h + 12,
        _ => panic!("bad meridiem in {text}"),
    };
    h24 * 60 + m
}

#[test]
fn chennai_full_moon_day() {
    let eph = LowPrecisionEphemeris::new();
    let loc = Variant::Tamil.default_location();
    let p = compute_tamil_panchang(&eph, date(2024, 4, 23), loc.latitude_deg, loc.longitude_deg)
        .unwrap();

    assert_eq!(p.tithi_number, 15);
    assert_eq!(p.tithi.english, "Pournami");
    assert_eq!(p.paksha.english, "Sukla Paksham");
    assert_eq!(p.special_day.map(|s| s.english), Some("Pournami (Full Moon)"));
    assert_eq!(p.moon_phase.english, "Full Moon");
    assert!(p.moon_illumination >= 95, "illumination {}", p.moon_illumination);
    // Tuesday
    assert_eq!(p.rahu_kaal, "3:00 PM - 4:30 PM");
    assert_eq!(p.vara.english, "Sevvai");
    // 05:52 and 18:21 IST
    assert!((clock_minutes(&p.sunrise) - (5 * 60 + 52)).abs() <= 5, "{}", p.sunrise);
    assert!((clock_minutes(&p.sunset) - (18 * 60 + 21)).abs() <= 5, "{}", p.sunset);
}

#[test]
fn delhi_new_moon_day() {
    let eph = LowPrecisionEphemeris::new();
    let loc = Variant::NorthIndian.default_location();
    let p = compute_north_indian_panchang(
        &eph,
        date(2024, 4, 8),
        loc.latitude_deg,
        loc.longitude_deg,
    )
    .unwrap();

    assert_eq!(p.tithi_number, 30);
    assert_eq!(p.tithi.native, "अमावस्या");
    assert_eq!(p.special_day.map(|s| s.english), Some("Amavasya (New Moon)"));
    assert_eq!(p.moon_phase.english, "New Moon");
    assert!(p.moon_illumination <= 3, "illumination {}", p.moon_illumination);
    assert_eq!(p.vikram_samvat, 2081);
    // 06:03 and 18:42 IST
    assert!((clock_minutes(&p.sunrise) - (6 * 60 + 3)).abs() <= 5, "{}", p.sunrise);
    assert!((clock_minutes(&p.sunset) - (18 * 60 + 42)).abs() <= 5, "{}", p.sunset);
}

#[test]
fn polar_night_uses_fallback_times() {
    let eph = LowPrecisionEphemeris::new();
    let p = tamil_panchang_with(
        &eph,
        date(2024, 12, 21),
        &GeoLocation::new(89.0, 0.0, 0.0),
        &PanchangConfig::default(),
    )
    .unwrap();
    assert_eq!(p.sunrise, "06:00 AM");
    assert_eq!(p.sunset, "06:30 PM");
}

#[test]
fn facts_at_local_noon() {
    let eph = LowPrecisionEphemeris::new();
    let f = day_facts(
        &eph,
        date(2024, 4, 23),
        &GeoLocation::CHENNAI,
        &PanchangConfig::default(),
    )
    .unwrap();
    assert_eq!(f.evaluated_at.to_rfc3339(), "2024-04-23T06:30:00+00:00");
    assert_eq!(f.moon_phase, MoonPhase::FullMoon);
    assert!((160.0..180.0).contains(&f.phase_angle_deg), "{}", f.phase_angle_deg);
    // Sun a little past 33 deg tropical in late April.
    assert!((32.0..35.0).contains(&f.sun_longitude_deg), "{}", f.sun_longitude_deg);
    assert_eq!(f.solar_month, 1);
}

#[test]
fn april_2024_special_days() {
    let eph = LowPrecisionEphemeris::new();
    let days = search_special_days(
        &eph,
        date(2024, 4, 1),
        30,
        Variant::Tamil,
        &PanchangConfig::default(),
    )
    .unwrap();

    assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    assert!(days.iter().all(|d| d.date.format("%Y-%m").to_string() == "2024-04"));
    let named = |d: NaiveDate| days.iter().find(|e| e.date == d).map(|e| e.name.english);
    assert_eq!(named(date(2024, 4, 8)), Some("Amavasai (New Moon)"));
    assert_eq!(named(date(2024, 4, 23)), Some("Pournami (Full Moon)"));
}
