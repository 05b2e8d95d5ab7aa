//! Types for panchang results.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tirtha_ephem::GeoLocation;

use crate::festival::DayKey;
use crate::karana::KaranaInfo;
use crate::moon_phase::MoonPhase;
use crate::nakshatra::NakshatraInfo;
use crate::names::LocalizedName;
use crate::tithi::TithiInfo;
use crate::yoga::YogaInfo;

/// Regional presentation of a panchang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Variant {
    /// Tamil solar calendar, Tamil script.
    Tamil,
    /// North Indian lunar naming, Devanagari script.
    NorthIndian,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Self::Tamil, Self::NorthIndian];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tamil => "tamil",
            Self::NorthIndian => "north",
        }
    }

    /// Observer used when the caller gives no coordinates:
    /// Chennai for Tamil, New Delhi for North Indian.
    pub const fn default_location(self) -> GeoLocation {
        match self {
            Self::Tamil => GeoLocation::CHENNAI,
            Self::NorthIndian => GeoLocation::DELHI,
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tamil" | "ta" => Ok(Self::Tamil),
            "north" | "north-indian" | "hindi" | "hi" => Ok(Self::NorthIndian),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

/// Variant-neutral facts for one civil date and observer.
///
/// Both presentations are built from this alone, so the Tamil and North
/// Indian views of a date can never disagree on the underlying astronomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayFacts {
    /// Civil date being described.
    pub date: NaiveDate,
    /// Instant at which Sun and Moon were evaluated.
    pub evaluated_at: DateTime<Utc>,
    /// Weekday of `date`, 0 = Sunday.
    pub weekday: u8,
    /// Gregorian year of `date`.
    pub gregorian_year: i32,
    /// Tropical apparent longitudes from the ephemeris, degrees.
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    /// Offset subtracted for nakshatra, yoga and month; 0 when tropical.
    pub ayanamsha_deg: f64,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    /// 0-based solar month (0 = Sun in Mesha).
    pub solar_month: u8,
    pub moon_phase: MoonPhase,
    /// Moon-Sun elongation reported by the ephemeris, degrees.
    pub phase_angle_deg: f64,
    /// Illuminated fraction as a whole percentage.
    pub illumination_percent: u8,
    /// Formatted local sunrise, or the configured fallback.
    pub sunrise: String,
    /// Formatted local sunset, or the configured fallback.
    pub sunset: String,
}

impl DayFacts {
    pub fn day_key(&self) -> DayKey {
        DayKey {
            tithi: self.tithi,
            nakshatra: self.nakshatra,
            weekday: self.weekday,
        }
    }
}

/// Tamil panchang for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TamilPanchang {
    pub date: NaiveDate,
    pub tithi: LocalizedName,
    /// 1..=30
    pub tithi_number: u8,
    pub paksha: LocalizedName,
    pub nakshatra: LocalizedName,
    /// 1..=27
    pub nakshatra_number: u8,
    pub yoga: LocalizedName,
    pub karana: LocalizedName,
    pub vara: LocalizedName,
    pub tamil_month: LocalizedName,
    pub tamil_year: LocalizedName,
    pub sunrise: String,
    pub sunset: String,
    pub moon_phase: LocalizedName,
    /// 0..=100
    pub moon_illumination: u8,
    pub rahu_kaal: String,
    pub yamagandam: String,
    pub gulika_kaal: String,
    pub auspicious: bool,
    pub special_day: Option<LocalizedName>,
}

/// North Indian panchang for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NorthIndianPanchang {
    pub date: NaiveDate,
    pub tithi: LocalizedName,
    /// 1..=30
    pub tithi_number: u8,
    pub paksha: LocalizedName,
    pub nakshatra: LocalizedName,
    /// 1..=27
    pub nakshatra_number: u8,
    pub yoga: LocalizedName,
    pub karana: LocalizedName,
    pub vara: LocalizedName,
    pub month: LocalizedName,
    pub vikram_samvat: i32,
    pub sunrise: String,
    pub sunset: String,
    pub moon_phase: LocalizedName,
    /// 0..=100
    pub moon_illumination: u8,
    pub rahu_kaal: String,
    pub auspicious: bool,
    pub special_day: Option<LocalizedName>,
}

/// A date carrying a special-day name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialDayEntry {
    pub date: NaiveDate,
    pub name: LocalizedName,
}
