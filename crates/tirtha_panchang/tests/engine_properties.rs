//! Engine behaviour against a deterministic fixed-position ephemeris.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tirtha_ephem::{Ephemeris, EphemerisError, GeoLocation, Illumination, RiseSetDirection};
use tirtha_panchang::{
    MoonPhase, Paksha, PanchangConfig, PanchangError, Variant, Zodiac, compute_north_indian_panchang,
    compute_tamil_panchang, day_facts, north_indian_from_facts, north_indian_panchang_with,
    search_special_days, tamil_from_facts, tamil_panchang_with,
};

#[derive(Debug, Clone, Copy)]
enum SunTimes {
    /// Rise 6h10m and set 18h25m after the search start.
    Found,
    NotFound,
    Fails,
}

/// Sun and Moon frozen at fixed longitudes.
#[derive(Debug, Clone, Copy)]
struct FixedEphemeris {
    sun: f64,
    moon: f64,
    fraction: f64,
    /// Overrides the elongation-derived phase angle.
    phase_angle: Option<f64>,
    sun_times: SunTimes,
    fail_positions: bool,
}

impl FixedEphemeris {
    fn new(sun: f64, moon: f64) -> Self {
        Self {
            sun,
            moon,
            fraction: 0.5,
            phase_angle: None,
            sun_times: SunTimes::Found,
            fail_positions: false,
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn sun_ecliptic_longitude(&self, _at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        if self.fail_positions {
            return Err(EphemerisError::NoConvergence("mock"));
        }
        Ok(self.sun)
    }

    fn moon_ecliptic_longitude(&self, _at: &DateTime<Utc>) -> Result<f64, EphemerisError> {
        if self.fail_positions {
            return Err(EphemerisError::NoConvergence("mock"));
        }
        Ok(self.moon)
    }

    fn moon_illumination(&self, _at: &DateTime<Utc>) -> Result<Illumination, EphemerisError> {
        Ok(Illumination {
            phase_angle_deg: self
                .phase_angle
                .unwrap_or_else(|| (self.moon - self.sun).rem_euclid(360.0)),
            phase_fraction: self.fraction,
        })
    }

    fn sun_rise_set(
        &self,
        direction: RiseSetDirection,
        _location: &GeoLocation,
        start: &DateTime<Utc>,
        _window_days: f64,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        match self.sun_times {
            SunTimes::Found => {
                let minutes = match direction {
                    RiseSetDirection::Rise => 6 * 60 + 10,
                    RiseSetDirection::Set => 18 * 60 + 25,
                };
                Ok(Some(*start + Duration::minutes(minutes)))
            }
            SunTimes::NotFound => Ok(None),
            SunTimes::Fails => Err(EphemerisError::NoConvergence("mock rise/set")),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const CHENNAI: GeoLocation = GeoLocation::CHENNAI;

#[test]
fn tamil_day_from_fixed_positions() {
    // Elongation 181: Krishna Prathama, moon at 191 in Swathi.
    let mut eph = FixedEphemeris::new(10.0, 191.0);
    eph.fraction = 0.99;
    // Monday
    let p = compute_tamil_panchang(&eph, date(2024, 4, 15), 13.0827, 80.2707).unwrap();

    assert_eq!(p.tithi_number, 16);
    assert_eq!(p.tithi.english, "Prathama");
    assert_eq!(p.paksha.english, "Krishna Paksham");
    assert_eq!(p.nakshatra_number, 15);
    assert_eq!(p.nakshatra.english, "Swathi");
    assert_eq!(p.yoga.english, "Siddhi");
    assert_eq!(p.tamil_month.english, "Chithirai");
    assert_eq!(p.vara.native, "திங்கட்கிழமை");
    assert_eq!(p.moon_phase.english, "Full Moon");
    assert_eq!(p.moon_illumination, 99);
    assert_eq!(p.rahu_kaal, "7:30 AM - 9:00 AM");
    assert_eq!(p.yamagandam, "10:30 AM - 12:00 PM");
    assert_eq!(p.gulika_kaal, "1:30 PM - 3:00 PM");
    assert_eq!(p.sunrise, "06:10 AM");
    assert_eq!(p.sunset, "06:25 PM");
    assert!(!p.auspicious);
    assert_eq!(p.special_day, None);
}

#[test]
fn north_indian_day_from_fixed_positions() {
    let eph = FixedEphemeris::new(10.0, 191.0);
    let p = compute_north_indian_panchang(&eph, date(2024, 4, 15), 28.6139, 77.2090).unwrap();
    assert_eq!(p.tithi_number, 16);
    assert_eq!(p.tithi.native, "प्रतिपदा");
    assert_eq!(p.month.english, "Chaitra");
    assert_eq!(p.vikram_samvat, 2081);
    assert_eq!(p.vara.native, "सोमवार");
    assert_eq!(p.rahu_kaal, "7:30 AM - 9:00 AM");
    assert_eq!(p.moon_illumination, 50);
}

#[test]
fn variants_agree_on_indices() {
    let eph = FixedEphemeris::new(123.4, 45.6);
    let facts = day_facts(&eph, date(2025, 1, 1), &CHENNAI, &PanchangConfig::default()).unwrap();
    let t = tamil_from_facts(&facts);
    let n = north_indian_from_facts(&facts);
    assert_eq!(t.tithi_number, n.tithi_number);
    assert_eq!(t.nakshatra_number, n.nakshatra_number);
    assert_eq!(t.tithi.english, n.tithi.english);
    assert_eq!(t.yoga.english, n.yoga.english);
    assert_eq!(t.karana.english, n.karana.english);
    assert_eq!(t.rahu_kaal, n.rahu_kaal);
    assert_eq!(t.auspicious, n.auspicious);
}

#[test]
fn friday_full_moon_is_plain_pournami() {
    // Elongation 175: tithi 15. 2024-04-19 is a Friday.
    let eph = FixedEphemeris::new(0.0, 175.0);
    let t = compute_tamil_panchang(&eph, date(2024, 4, 19), 13.0, 80.0).unwrap();
    assert_eq!(t.special_day.map(|s| s.english), Some("Pournami (Full Moon)"));
    let n = compute_north_indian_panchang(&eph, date(2024, 4, 19), 28.0, 77.0).unwrap();
    assert_eq!(n.special_day.map(|s| s.english), Some("Purnima (Full Moon)"));
}

#[test]
fn missing_sun_times_use_fallback() {
    let mut eph = FixedEphemeris::new(10.0, 100.0);
    eph.sun_times = SunTimes::NotFound;
    let t = compute_tamil_panchang(&eph, date(2024, 12, 21), 89.0, 0.0).unwrap();
    assert_eq!(t.sunrise, "06:00 AM");
    assert_eq!(t.sunset, "06:30 PM");
}

#[test]
fn failing_sun_times_use_fallback() {
    let mut eph = FixedEphemeris::new(10.0, 100.0);
    eph.sun_times = SunTimes::Fails;
    let n = compute_north_indian_panchang(&eph, date(2024, 6, 1), 28.0, 77.0).unwrap();
    assert_eq!(n.sunrise, "06:00 AM");
    assert_eq!(n.sunset, "06:30 PM");
    // Everything else is still computed.
    assert!((1..=30).contains(&n.tithi_number));
}

#[test]
fn custom_fallback_text() {
    let mut eph = FixedEphemeris::new(10.0, 100.0);
    eph.sun_times = SunTimes::NotFound;
    let config = PanchangConfig {
        fallback_sunrise: "--:--".to_string(),
        fallback_sunset: "n/a".to_string(),
        ..Default::default()
    };
    let t = tamil_panchang_with(&eph, date(2024, 6, 1), &CHENNAI, &config).unwrap();
    assert_eq!(t.sunrise, "--:--");
    assert_eq!(t.sunset, "n/a");
}

#[test]
fn sun_times_follow_utc_offset() {
    let eph = FixedEphemeris::new(10.0, 100.0);
    let config = PanchangConfig {
        utc_offset_minutes: 0,
        ..Default::default()
    };
    let f = day_facts(&eph, date(2024, 6, 1), &GeoLocation::new(51.5, 0.0, 0.0), &config).unwrap();
    // Search starts at UTC midnight, so the mock times read unchanged.
    assert_eq!(f.sunrise, "06:10 AM");
    assert_eq!(f.sunset, "06:25 PM");
}

#[test]
fn position_errors_propagate() {
    let mut eph = FixedEphemeris::new(10.0, 100.0);
    eph.fail_positions = true;
    let err = compute_tamil_panchang(&eph, date(2024, 6, 1), 13.0, 80.0).unwrap_err();
    assert!(matches!(err, PanchangError::Ephemeris(_)), "{err}");
}

#[test]
fn non_finite_longitude_is_rejected() {
    let eph = FixedEphemeris::new(f64::NAN, 100.0);
    let err = compute_tamil_panchang(&eph, date(2024, 6, 1), 13.0, 80.0).unwrap_err();
    assert_eq!(err, PanchangError::NonFiniteValue("sun longitude"));
}

#[test]
fn non_finite_illumination_is_rejected() {
    let mut eph = FixedEphemeris::new(10.0, 100.0);
    eph.phase_angle = Some(f64::NAN);
    let err = compute_tamil_panchang(&eph, date(2024, 6, 1), 13.0, 80.0).unwrap_err();
    assert_eq!(err, PanchangError::NonFiniteValue("moon phase angle"));

    let mut eph = FixedEphemeris::new(10.0, 100.0);
    eph.fraction = f64::INFINITY;
    let err = compute_north_indian_panchang(&eph, date(2024, 6, 1), 28.0, 77.0).unwrap_err();
    assert_eq!(err, PanchangError::NonFiniteValue("moon illuminated fraction"));
}

#[test]
fn invalid_location_is_rejected() {
    let eph = FixedEphemeris::new(10.0, 100.0);
    for (lat, lon) in [(95.0, 0.0), (-91.0, 0.0), (0.0, 181.0), (f64::NAN, 0.0)] {
        let err = compute_north_indian_panchang(&eph, date(2024, 6, 1), lat, lon).unwrap_err();
        assert!(
            matches!(err, PanchangError::InvalidLocation(_)),
            "({lat}, {lon}): {err}"
        );
    }
}

#[test]
fn invalid_config_is_rejected() {
    let eph = FixedEphemeris::new(10.0, 100.0);
    let config = PanchangConfig {
        rise_set_window_days: 0.0,
        ..Default::default()
    };
    let err = north_indian_panchang_with(&eph, date(2024, 6, 1), &CHENNAI, &config).unwrap_err();
    assert!(matches!(err, PanchangError::InvalidConfig(_)));
}

#[test]
fn same_inputs_same_outputs() {
    let eph = FixedEphemeris::new(77.7, 301.3);
    let a = compute_tamil_panchang(&eph, date(2023, 11, 12), 13.0827, 80.2707).unwrap();
    let b = compute_tamil_panchang(&eph, date(2023, 11, 12), 13.0827, 80.2707).unwrap();
    assert_eq!(a, b);
}

#[test]
fn indices_stay_in_range_over_the_circle() {
    for sun_step in 0..24 {
        for moon_step in 0..72 {
            let sun = f64::from(sun_step) * 15.0 + 0.3;
            let moon = f64::from(moon_step) * 5.0 + 0.7;
            let eph = FixedEphemeris::new(sun, moon);
            let f = day_facts(&eph, date(2024, 1, 1), &CHENNAI, &PanchangConfig::default())
                .unwrap();
            assert!((1..=30).contains(&f.tithi.number));
            assert_eq!(f.tithi.paksha == Paksha::Shukla, f.tithi.number <= 15);
            assert!((1..=27).contains(&f.nakshatra.number));
            assert!((1..=27).contains(&f.yoga.number));
            assert!(f.karana.index <= 10);
            assert!(f.solar_month <= 11);
            assert!(f.illumination_percent <= 100);
        }
    }
}

#[test]
fn longitudes_at_360_wrap() {
    let eph = FixedEphemeris::new(359.999_999, 359.999_999);
    let f = day_facts(&eph, date(2024, 1, 1), &CHENNAI, &PanchangConfig::default()).unwrap();
    assert_eq!(f.nakshatra.number, 27);
    assert_eq!(f.solar_month, 11);
    assert_eq!(f.tithi.number, 1);
    assert_eq!(f.moon_phase, MoonPhase::NewMoon);
}

#[test]
fn sidereal_zodiac_moves_nakshatra_not_tithi() {
    let eph = FixedEphemeris::new(10.0, 191.0);
    let tropical = day_facts(&eph, date(2024, 4, 15), &CHENNAI, &PanchangConfig::default()).unwrap();
    let config = PanchangConfig {
        zodiac: Zodiac::Lahiri,
        ..Default::default()
    };
    let lahiri = day_facts(&eph, date(2024, 4, 15), &CHENNAI, &config).unwrap();
    assert!((lahiri.ayanamsha_deg - 24.19).abs() < 0.05, "{}", lahiri.ayanamsha_deg);
    assert_eq!(lahiri.tithi, tropical.tithi);
    assert_eq!(lahiri.karana, tropical.karana);
    // 191 - 24.19 = 166.8 -> Hastham; 10 - 24.19 wraps into Panguni.
    assert_eq!(lahiri.nakshatra.number, 13);
    assert_eq!(lahiri.solar_month, 11);
    assert_eq!(tropical.ayanamsha_deg, 0.0);
}

#[test]
fn works_through_trait_object() {
    let eph = FixedEphemeris::new(10.0, 191.0);
    let dyn_eph: &dyn Ephemeris = &eph;
    let a = compute_tamil_panchang(dyn_eph, date(2024, 4, 15), 13.0, 80.0).unwrap();
    let b = compute_tamil_panchang(&eph, date(2024, 4, 15), 13.0, 80.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn search_constant_full_moon_marks_every_day() {
    let eph = FixedEphemeris::new(0.0, 175.0);
    let days = search_special_days(
        &eph,
        date(2024, 4, 1),
        10,
        Variant::NorthIndian,
        &PanchangConfig::default(),
    )
    .unwrap();
    assert_eq!(days.len(), 10);
    assert_eq!(days[0].date, date(2024, 4, 1));
    assert_eq!(days[9].date, date(2024, 4, 10));
    assert!(days.iter().all(|d| d.name.native == "पूर्णिमा"));
}

#[test]
fn search_plain_day_finds_nothing() {
    // Shukla Prathama in Swathi: no rule applies.
    let eph = FixedEphemeris::new(185.0, 191.0);
    let days = search_special_days(
        &eph,
        date(2024, 4, 1),
        30,
        Variant::Tamil,
        &PanchangConfig::default(),
    )
    .unwrap();
    assert!(days.is_empty());
    let none = search_special_days(
        &eph,
        date(2024, 4, 1),
        0,
        Variant::Tamil,
        &PanchangConfig::default(),
    )
    .unwrap();
    assert!(none.is_empty());
}
