//! Panchang computation for a civil date.
//!
//! A date is evaluated at exactly one instant (see [`EvaluationInstant`]).
//! Sun and Moon are queried once; every element is derived from those
//! intermediates. Sunrise and sunset are the only quantities with a local
//! fallback: a failed or empty search yields the configured text and a
//! warning, never an error.
//!
//! [`EvaluationInstant`]: tirtha_time::EvaluationInstant

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use log::{debug, warn};
use tirtha_ephem::{Ephemeris, EphemerisError, GeoLocation, RiseSetDirection};
use tirtha_time::{format_clock_12h, jd_from_utc, local_day_start, utc_offset};

use crate::config::PanchangConfig;
use crate::error::PanchangError;
use crate::festival::{is_auspicious, north_indian_special_day, tamil_special_day};
use crate::kaal::KaalKind;
use crate::karana::karana_from_elongation;
use crate::masa::{north_indian_month, solar_month_index, tamil_month};
use crate::moon_phase::{MoonPhase, illumination_percent};
use crate::nakshatra::nakshatra_from_longitude;
use crate::panchang_types::{DayFacts, NorthIndianPanchang, TamilPanchang};
use crate::samvatsara::{tamil_year, vikram_samvat};
use crate::tithi::{elongation_deg, tithi_from_elongation};
use crate::vara::{vara_names, weekday_index};
use crate::yoga::yoga_from_longitudes;

/// Sun and Moon at the evaluation instant of one date.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Positions {
    pub at: DateTime<Utc>,
    pub jd: f64,
    pub sun_lon: f64,
    pub moon_lon: f64,
}

fn finite(value: f64, what: &'static str) -> Result<f64, PanchangError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PanchangError::NonFiniteValue(what))
    }
}

pub(crate) fn positions<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    offset: FixedOffset,
    config: &PanchangConfig,
) -> Result<Positions, PanchangError> {
    let at = config.instant.resolve(date, offset)?;
    let sun_lon = finite(ephem.sun_ecliptic_longitude(&at)?, "sun longitude")?;
    let moon_lon = finite(ephem.moon_ecliptic_longitude(&at)?, "moon longitude")?;
    Ok(Positions {
        at,
        jd: jd_from_utc(&at),
        sun_lon,
        moon_lon,
    })
}

/// Local clock text for a rise/set search result, or the fallback.
fn sun_time_text(
    result: Result<Option<DateTime<Utc>>, EphemerisError>,
    offset: FixedOffset,
    fallback: &str,
    event: &str,
    date: NaiveDate,
) -> String {
    match result {
        Ok(Some(t)) => format_clock_12h(&t.with_timezone(&offset)),
        Ok(None) => {
            warn!("no {event} on {date} within search window, using {fallback}");
            fallback.to_string()
        }
        Err(e) => {
            warn!("{event} search failed on {date}: {e}, using {fallback}");
            fallback.to_string()
        }
    }
}

/// Compute the variant-neutral facts for `date` at `location`.
pub fn day_facts<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<DayFacts, PanchangError> {
    config.validate()?;
    location.validate()?;
    let offset = utc_offset(config.utc_offset_minutes)?;

    let pos = positions(ephem, date, offset, config)?;
    let illumination = ephem.moon_illumination(&pos.at)?;
    let phase_angle_deg = finite(illumination.phase_angle_deg, "moon phase angle")?;
    let phase_fraction = finite(illumination.phase_fraction, "moon illuminated fraction")?;

    // Tithi and karana use the tropical elongation; the ayanamsha cancels.
    let elong = elongation_deg(pos.moon_lon, pos.sun_lon);
    let tithi = tithi_from_elongation(elong);
    let karana = karana_from_elongation(elong);

    let ayanamsha_deg = config.zodiac.ayanamsha_deg(pos.jd);
    let sun_sid = config.zodiac.apply(pos.sun_lon, pos.jd);
    let moon_sid = config.zodiac.apply(pos.moon_lon, pos.jd);
    let nakshatra = nakshatra_from_longitude(moon_sid);
    let yoga = yoga_from_longitudes(moon_sid, sun_sid);
    let solar_month = solar_month_index(sun_sid);

    let moon_phase = MoonPhase::from_phase_angle(phase_angle_deg);
    let illumination_pct = illumination_percent(phase_fraction);

    let day_start = local_day_start(date, offset)?;
    let window = config.rise_set_window_days;
    let sunrise = sun_time_text(
        ephem.sun_rise_set(RiseSetDirection::Rise, location, &day_start, window),
        offset,
        &config.fallback_sunrise,
        "sunrise",
        date,
    );
    let sunset = sun_time_text(
        ephem.sun_rise_set(RiseSetDirection::Set, location, &day_start, window),
        offset,
        &config.fallback_sunset,
        "sunset",
        date,
    );

    debug!(
        "{date} @ {}: sun={:.4} moon={:.4} aya={ayanamsha_deg:.4} tithi={} nak={} yoga={} karana={} month={solar_month}",
        pos.at, pos.sun_lon, pos.moon_lon, tithi.number, nakshatra.number, yoga.number, karana.index
    );

    Ok(DayFacts {
        date,
        evaluated_at: pos.at,
        weekday: weekday_index(date),
        gregorian_year: date.year(),
        sun_longitude_deg: pos.sun_lon,
        moon_longitude_deg: pos.moon_lon,
        ayanamsha_deg,
        tithi,
        nakshatra,
        yoga,
        karana,
        solar_month,
        moon_phase,
        phase_angle_deg,
        illumination_percent: illumination_pct,
        sunrise,
        sunset,
    })
}

/// Tamil presentation of computed facts.
pub fn tamil_from_facts(facts: &DayFacts) -> TamilPanchang {
    TamilPanchang {
        date: facts.date,
        tithi: facts.tithi.names().tamil(),
        tithi_number: facts.tithi.number,
        paksha: facts.tithi.paksha.names().tamil(),
        nakshatra: facts.nakshatra.names().tamil(),
        nakshatra_number: facts.nakshatra.number,
        yoga: facts.yoga.names().tamil(),
        karana: facts.karana.names().tamil(),
        vara: vara_names(facts.weekday).tamil(),
        tamil_month: tamil_month(facts.solar_month),
        tamil_year: tamil_year(facts.gregorian_year),
        sunrise: facts.sunrise.clone(),
        sunset: facts.sunset.clone(),
        moon_phase: facts.moon_phase.names().tamil(),
        moon_illumination: facts.illumination_percent,
        rahu_kaal: KaalKind::RahuKaal.window(facts.weekday).to_string(),
        yamagandam: KaalKind::Yamagandam.window(facts.weekday).to_string(),
        gulika_kaal: KaalKind::GulikaKaal.window(facts.weekday).to_string(),
        auspicious: is_auspicious(&facts.tithi, &facts.nakshatra, &facts.yoga),
        special_day: tamil_special_day(&facts.day_key()),
    }
}

/// North Indian presentation of computed facts.
pub fn north_indian_from_facts(facts: &DayFacts) -> NorthIndianPanchang {
    NorthIndianPanchang {
        date: facts.date,
        tithi: facts.tithi.names().hindi(),
        tithi_number: facts.tithi.number,
        paksha: facts.tithi.paksha.names().hindi(),
        nakshatra: facts.nakshatra.names().hindi(),
        nakshatra_number: facts.nakshatra.number,
        yoga: facts.yoga.names().hindi(),
        karana: facts.karana.names().hindi(),
        vara: vara_names(facts.weekday).hindi(),
        month: north_indian_month(facts.solar_month),
        vikram_samvat: vikram_samvat(facts.gregorian_year),
        sunrise: facts.sunrise.clone(),
        sunset: facts.sunset.clone(),
        moon_phase: facts.moon_phase.names().hindi(),
        moon_illumination: facts.illumination_percent,
        rahu_kaal: KaalKind::RahuKaal.window(facts.weekday).to_string(),
        auspicious: is_auspicious(&facts.tithi, &facts.nakshatra, &facts.yoga),
        special_day: north_indian_special_day(&facts.day_key()),
    }
}

/// Tamil panchang with an explicit observer and configuration.
pub fn tamil_panchang_with<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<TamilPanchang, PanchangError> {
    day_facts(ephem, date, location, config).map(|f| tamil_from_facts(&f))
}

/// North Indian panchang with an explicit observer and configuration.
pub fn north_indian_panchang_with<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<NorthIndianPanchang, PanchangError> {
    day_facts(ephem, date, location, config).map(|f| north_indian_from_facts(&f))
}

/// Tamil panchang for `date` at sea level, default configuration.
///
/// Pass `Variant::Tamil.default_location()` coordinates for Chennai.
pub fn compute_tamil_panchang<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<TamilPanchang, PanchangError> {
    let location = GeoLocation::new(latitude_deg, longitude_deg, 0.0);
    tamil_panchang_with(ephem, date, &location, &PanchangConfig::default())
}

/// North Indian panchang for `date` at sea level, default configuration.
pub fn compute_north_indian_panchang<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NorthIndianPanchang, PanchangError> {
    let location = GeoLocation::new(latitude_deg, longitude_deg, 0.0);
    north_indian_panchang_with(ephem, date, &location, &PanchangConfig::default())
}
