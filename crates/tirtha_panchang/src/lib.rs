//! Tamil and North Indian panchang computation.
//!
//! This crate provides:
//! - Tithi, Paksha, Nakshatra, Yoga and Karana classification from Sun and
//!   Moon ecliptic longitudes
//! - Solar month, Tamil 60-year cycle and Vikram Samvat naming
//! - Rahu Kaal, Yamagandam and Gulika Kaal windows
//! - Moon phase, special days and the auspicious-day flag
//! - [`compute_tamil_panchang`] / [`compute_north_indian_panchang`], which
//!   assemble one day from any [`tirtha_ephem::Ephemeris`]
//!
//! All names are static tables carrying a Latin transliteration plus Tamil
//! and Devanagari script.

pub mod ayanamsha;
pub mod config;
pub mod error;
pub mod festival;
pub mod kaal;
pub mod karana;
pub mod masa;
pub mod moon_phase;
pub mod nakshatra;
pub mod names;
pub mod panchang;
pub mod panchang_types;
pub mod samvatsara;
pub mod search;
pub mod tithi;
pub mod util;
pub mod vara;
pub mod yoga;

pub use ayanamsha::{Zodiac, general_precession_deg};
pub use config::{FALLBACK_SUNRISE, FALLBACK_SUNSET, MAX_RISE_SET_WINDOW_DAYS, PanchangConfig};
pub use error::PanchangError;
pub use festival::{
    AUSPICIOUS_NAKSHATRAS, AUSPICIOUS_YOGAS, Condition, DayKey, NORTH_INDIAN_SPECIAL_DAYS,
    SpecialDayRule, TAMIL_SPECIAL_DAYS, first_special_day, is_auspicious, is_auspicious_nakshatra,
    is_auspicious_tithi, is_auspicious_yoga, north_indian_special_day, tamil_special_day,
};
pub use kaal::{KaalKind, TimeWindow};
pub use karana::{KARANA_NAMES, KaranaInfo, karana_from_elongation};
pub use masa::{NORTH_INDIAN_MONTHS, TAMIL_MONTHS, north_indian_month, solar_month_index, tamil_month};
pub use moon_phase::{ALL_MOON_PHASES, MoonPhase, illumination_percent};
pub use nakshatra::{NAKSHATRA_NAMES, NakshatraInfo, nakshatra_from_longitude};
pub use names::{LocalizedName, Names};
pub use panchang::{
    compute_north_indian_panchang, compute_tamil_panchang, day_facts, north_indian_from_facts,
    north_indian_panchang_with, tamil_from_facts, tamil_panchang_with,
};
pub use panchang_types::{DayFacts, NorthIndianPanchang, SpecialDayEntry, TamilPanchang, Variant};
pub use samvatsara::{TAMIL_YEARS, tamil_year, tamil_year_index, vikram_samvat};
pub use search::search_special_days;
pub use tithi::{
    Paksha, TITHI_NAMES, TithiInfo, elongation_deg, tithi_from_elongation, tithi_from_longitudes,
};
pub use util::normalize_360;
pub use vara::{VARA_NAMES, vara_names, weekday_from_index, weekday_index};
pub use yoga::{YOGA_NAMES, YogaInfo, longitude_sum_deg, yoga_from_longitudes};

// Re-exported so callers need only this crate for the common path.
pub use tirtha_ephem::{Ephemeris, GeoLocation, LowPrecisionEphemeris};
pub use tirtha_time::EvaluationInstant;
