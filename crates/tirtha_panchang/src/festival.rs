//! Special-day detection and the auspicious-day flag.
//!
//! Special days are ordered rule lists: the first matching rule names the
//! day. The Friday/Pournami and Tuesday/Chaturthi rules come after the
//! plain Pournami and Chaturthi rules and so never match.

use crate::names::LocalizedName;
use crate::nakshatra::NakshatraInfo;
use crate::tithi::{Paksha, TithiInfo};
use crate::yoga::YogaInfo;

/// Tithi/nakshatra condition of one special-day rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Exact tithi number (1..=30).
    Tithi(u8),
    /// Tithi at this position (1..=15) in either paksha.
    TithiInPaksha(u8),
    /// Tithi at this position in Krishna paksha only.
    KrishnaTithi(u8),
    /// Moon in this nakshatra (1..=27).
    Nakshatra(u8),
}

/// One entry of a special-day rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialDayRule {
    /// Restrict to a weekday (0 = Sunday), or any day.
    pub weekday: Option<u8>,
    pub condition: Condition,
    pub name: LocalizedName,
}

/// Facts a special-day rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayKey {
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
}

impl SpecialDayRule {
    const fn any_day(condition: Condition, name: LocalizedName) -> Self {
        Self {
            weekday: None,
            condition,
            name,
        }
    }

    const fn on(weekday: u8, condition: Condition, name: LocalizedName) -> Self {
        Self {
            weekday: Some(weekday),
            condition,
            name,
        }
    }

    pub fn matches(&self, key: &DayKey) -> bool {
        if self.weekday.is_some_and(|w| w != key.weekday) {
            return false;
        }
        match self.condition {
            Condition::Tithi(n) => key.tithi.number == n,
            Condition::TithiInPaksha(n) => {
                key.tithi.tithi_in_paksha() == n && !key.tithi.is_new_moon()
            }
            Condition::KrishnaTithi(n) => {
                key.tithi.paksha == Paksha::Krishna && key.tithi.tithi_in_paksha() == n
            }
            Condition::Nakshatra(n) => key.nakshatra.number == n,
        }
    }
}

/// Tamil special days, in priority order.
pub const TAMIL_SPECIAL_DAYS: [SpecialDayRule; 11] = [
    SpecialDayRule::any_day(
        Condition::Tithi(15),
        LocalizedName::new("Pournami (Full Moon)", "பௌர்ணமி"),
    ),
    SpecialDayRule::any_day(
        Condition::Tithi(30),
        LocalizedName::new("Amavasai (New Moon)", "அமாவாசை"),
    ),
    SpecialDayRule::any_day(
        Condition::TithiInPaksha(13),
        LocalizedName::new("Pradosham", "பிரதோஷம்"),
    ),
    SpecialDayRule::any_day(
        Condition::TithiInPaksha(11),
        LocalizedName::new("Ekadasi Viratham", "ஏகாதசி விரதம்"),
    ),
    SpecialDayRule::any_day(
        Condition::TithiInPaksha(4),
        LocalizedName::new("Sankatahara Chaturthi", "சங்கடஹர சதுர்த்தி"),
    ),
    SpecialDayRule::any_day(
        Condition::KrishnaTithi(8),
        LocalizedName::new("Krishna Ashtami", "கிருஷ்ண அஷ்டமி"),
    ),
    SpecialDayRule::any_day(
        Condition::Nakshatra(3),
        LocalizedName::new("Karthigai Nakshatram", "கார்த்திகை நட்சத்திரம்"),
    ),
    SpecialDayRule::any_day(
        Condition::Nakshatra(22),
        LocalizedName::new("Thiruvonam Nakshatram", "திருவோண நட்சத்திரம்"),
    ),
    SpecialDayRule::any_day(
        Condition::Nakshatra(8),
        LocalizedName::new("Poosam Nakshatram - Auspicious", "பூசம் நட்சத்திரம் - சுபம்"),
    ),
    // Shadowed by the Pournami rule.
    SpecialDayRule::on(
        5,
        Condition::Tithi(15),
        LocalizedName::new("Lakshmi Pournami", "லட்சுமி பௌர்ணமி"),
    ),
    // Shadowed by the Chaturthi rule.
    SpecialDayRule::on(
        2,
        Condition::TithiInPaksha(4),
        LocalizedName::new("Angaaraka Chaturthi", "அங்காரக சதுர்த்தி"),
    ),
];

/// North Indian special days, in priority order.
pub const NORTH_INDIAN_SPECIAL_DAYS: [SpecialDayRule; 6] = [
    SpecialDayRule::any_day(
        Condition::Tithi(15),
        LocalizedName::new("Purnima (Full Moon)", "पूर्णिमा"),
    ),
    SpecialDayRule::any_day(
        Condition::Tithi(30),
        LocalizedName::new("Amavasya (New Moon)", "अमावस्या"),
    ),
    SpecialDayRule::any_day(
        Condition::TithiInPaksha(13),
        LocalizedName::new("Pradosh Vrat", "प्रदोष व्रत"),
    ),
    SpecialDayRule::any_day(
        Condition::TithiInPaksha(11),
        LocalizedName::new("Ekadashi Vrat", "एकादशी व्रत"),
    ),
    SpecialDayRule::any_day(
        Condition::TithiInPaksha(4),
        LocalizedName::new("Vinayak Chaturthi", "विनायक चतुर्थी"),
    ),
    SpecialDayRule::any_day(
        Condition::KrishnaTithi(8),
        LocalizedName::new("Krishna Ashtami", "कृष्ण अष्टमी"),
    ),
];

/// Name of the first rule matching `key`, if any.
pub fn first_special_day(rules: &[SpecialDayRule], key: &DayKey) -> Option<LocalizedName> {
    rules.iter().find(|r| r.matches(key)).map(|r| r.name)
}

pub fn tamil_special_day(key: &DayKey) -> Option<LocalizedName> {
    first_special_day(&TAMIL_SPECIAL_DAYS, key)
}

pub fn north_indian_special_day(key: &DayKey) -> Option<LocalizedName> {
    first_special_day(&NORTH_INDIAN_SPECIAL_DAYS, key)
}

/// Favourable tithi positions, in either paksha. Pournami is handled apart:
/// position 15 of Krishna paksha is Amavasai, which is not favourable.
const AUSPICIOUS_TITHI_POSITIONS: [u8; 7] = [2, 3, 5, 7, 10, 11, 13];

/// Favourable nakshatra numbers: Ashwini, Rohini, Mrigasheersham, Poosam,
/// Hastham, Chithirai, Swathi, Anusham, Thiruvonam, Avittam, Revathi.
pub const AUSPICIOUS_NAKSHATRAS: [u8; 11] = [1, 4, 5, 8, 13, 14, 15, 17, 22, 23, 27];

/// Favourable yoga numbers.
pub const AUSPICIOUS_YOGAS: [u8; 14] = [2, 3, 4, 5, 7, 8, 14, 16, 20, 21, 22, 23, 24, 25];

pub fn is_auspicious_tithi(tithi: &TithiInfo) -> bool {
    tithi.is_full_moon()
        || (!tithi.is_new_moon() && AUSPICIOUS_TITHI_POSITIONS.contains(&tithi.tithi_in_paksha()))
}

pub fn is_auspicious_nakshatra(nakshatra: &NakshatraInfo) -> bool {
    AUSPICIOUS_NAKSHATRAS.contains(&nakshatra.number)
}

pub fn is_auspicious_yoga(yoga: &YogaInfo) -> bool {
    AUSPICIOUS_YOGAS.contains(&yoga.number)
}

/// A day is auspicious only when its tithi, nakshatra and yoga all are.
pub fn is_auspicious(tithi: &TithiInfo, nakshatra: &NakshatraInfo, yoga: &YogaInfo) -> bool {
    is_auspicious_tithi(tithi) && is_auspicious_nakshatra(nakshatra) && is_auspicious_yoga(yoga)
}
