//! Nakshatra (lunar mansion) from the Moon's longitude.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20' each,
//! starting at 0 deg of the configured zodiac.

use serde::Serialize;

use crate::names::Names;
use crate::util::sector_index;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Nakshatra names, index 0 = Ashwini.
pub const NAKSHATRA_NAMES: [Names; 27] = [
    Names::new("Ashwini", "அசுவினி", "अश्विनी"),
    Names::new("Bharani", "பரணி", "भरणी"),
    Names::new("Karthigai", "கார்த்திகை", "कृत्तिका"),
    Names::new("Rohini", "ரோகிணி", "रोहिणी"),
    Names::new("Mrigasheersham", "மிருகசீரிடம்", "मृगशिरा"),
    Names::new("Thiruvathirai", "திருவாதிரை", "आर्द्रा"),
    Names::new("Punarpusam", "புனர்பூசம்", "पुनर्वसु"),
    Names::new("Poosam", "பூசம்", "पुष्य"),
    Names::new("Ayilyam", "ஆயில்யம்", "आश्लेषा"),
    Names::new("Magam", "மகம்", "मघा"),
    Names::new("Pooram", "பூரம்", "पूर्वा फाल्गुनी"),
    Names::new("Uthiram", "உத்திரம்", "उत्तरा फाल्गुनी"),
    Names::new("Hastham", "அஸ்தம்", "हस्त"),
    Names::new("Chithirai", "சித்திரை", "चित्रा"),
    Names::new("Swathi", "சுவாதி", "स्वाति"),
    Names::new("Visakam", "விசாகம்", "विशाखा"),
    Names::new("Anusham", "அனுஷம்", "अनुराधा"),
    Names::new("Kettai", "கேட்டை", "ज्येष्ठा"),
    Names::new("Moolam", "மூலம்", "मूल"),
    Names::new("Pooradam", "பூராடம்", "पूर्वाषाढ़ा"),
    Names::new("Uthiradam", "உத்திராடம்", "उत्तराषाढ़ा"),
    Names::new("Thiruvonam", "திருவோணம்", "श्रवण"),
    Names::new("Avittam", "அவிட்டம்", "धनिष्ठा"),
    Names::new("Sathayam", "சதயம்", "शतभिषा"),
    Names::new("Poorattathi", "பூரட்டாதி", "पूर्वा भाद्रपद"),
    Names::new("Uthirattathi", "உத்திரட்டாதி", "उत्तरा भाद्रपद"),
    Names::new("Revathi", "ரேவதி", "रेवती"),
];

/// Moon's nakshatra at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NakshatraInfo {
    /// 1-based nakshatra number (1 = Ashwini .. 27 = Revathi).
    pub number: u8,
}

impl NakshatraInfo {
    /// Build from a 1-based number; `None` outside 1..=27.
    pub fn from_number(number: u8) -> Option<Self> {
        (1..=27).contains(&number).then_some(Self { number })
    }

    pub const fn names(&self) -> Names {
        NAKSHATRA_NAMES[(self.number as usize + 26) % 27]
    }
}

/// Nakshatra from the Moon's ecliptic longitude in degrees.
pub fn nakshatra_from_longitude(moon_lon_deg: f64) -> NakshatraInfo {
    NakshatraInfo {
        number: sector_index(moon_lon_deg, 27) + 1,
    }
}
