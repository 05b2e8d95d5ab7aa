//! Month naming from the Sun's longitude.
//!
//! Both variants index months by the Sun's 30 deg sign: index 0 begins when
//! the Sun enters Mesha (Aries), mid-April. The Tamil calendar is solar, so
//! this is its true month. North Indian months are lunar; naming them by
//! the solar sign is an approximation that can lag the lunation by up to a
//! month.

use crate::names::LocalizedName;
use crate::util::sector_index;

/// Tamil solar months, index 0 = Chithirai.
pub const TAMIL_MONTHS: [LocalizedName; 12] = [
    LocalizedName::new("Chithirai", "சித்திரை"),
    LocalizedName::new("Vaikasi", "வைகாசி"),
    LocalizedName::new("Aani", "ஆனி"),
    LocalizedName::new("Aadi", "ஆடி"),
    LocalizedName::new("Aavani", "ஆவணி"),
    LocalizedName::new("Purattasi", "புரட்டாசி"),
    LocalizedName::new("Aippasi", "ஐப்பசி"),
    LocalizedName::new("Karthigai", "கார்த்திகை"),
    LocalizedName::new("Margazhi", "மார்கழி"),
    LocalizedName::new("Thai", "தை"),
    LocalizedName::new("Maasi", "மாசி"),
    LocalizedName::new("Panguni", "பங்குனி"),
];

/// North Indian (purnimanta) month names, index 0 = Chaitra.
pub const NORTH_INDIAN_MONTHS: [LocalizedName; 12] = [
    LocalizedName::new("Chaitra", "चैत्र"),
    LocalizedName::new("Vaishakha", "वैशाख"),
    LocalizedName::new("Jyeshtha", "ज्येष्ठ"),
    LocalizedName::new("Ashadha", "आषाढ़"),
    LocalizedName::new("Shravana", "श्रावण"),
    LocalizedName::new("Bhadrapada", "भाद्रपद"),
    LocalizedName::new("Ashwin", "आश्विन"),
    LocalizedName::new("Kartik", "कार्तिक"),
    LocalizedName::new("Margashirsha", "मार्गशीर्ष"),
    LocalizedName::new("Pausha", "पौष"),
    LocalizedName::new("Magha", "माघ"),
    LocalizedName::new("Phalguna", "फाल्गुन"),
];

/// 0-based solar month (sign) index from the Sun's longitude.
pub fn solar_month_index(sun_lon_deg: f64) -> u8 {
    sector_index(sun_lon_deg, 12)
}

pub fn tamil_month(index: u8) -> LocalizedName {
    TAMIL_MONTHS[usize::from(index) % 12]
}

pub fn north_indian_month(index: u8) -> LocalizedName {
    NORTH_INDIAN_MONTHS[usize::from(index) % 12]
}
