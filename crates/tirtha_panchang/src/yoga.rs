//! Yoga from the sum of Moon and Sun longitudes.

use serde::Serialize;

use crate::names::Names;
use crate::util::{normalize_360, sector_index};

/// Yoga names, index 0 = Vishkambam.
pub const YOGA_NAMES: [Names; 27] = [
    Names::new("Vishkambam", "விஷ்கம்பம்", "विष्कम्भ"),
    Names::new("Preethi", "ப்ரீதி", "प्रीति"),
    Names::new("Ayushman", "ஆயுஷ்மான்", "आयुष्मान"),
    Names::new("Sowbhagyam", "சௌபாக்யம்", "सौभाग्य"),
    Names::new("Shobanam", "சோபனம்", "शोभन"),
    Names::new("Athighandam", "அதிகண்டம்", "अतिगण्ड"),
    Names::new("Sukarma", "சுகர்மா", "सुकर्मा"),
    Names::new("Dhrithi", "த்ருதி", "धृति"),
    Names::new("Soolam", "சூலம்", "शूल"),
    Names::new("Gandam", "கண்டம்", "गण्ड"),
    Names::new("Viruthi", "விருத்தி", "वृद्धि"),
    Names::new("Dhruvam", "த்ருவம்", "ध्रुव"),
    Names::new("Vyagatham", "வியாகாதம்", "व्याघात"),
    Names::new("Harshanam", "ஹர்ஷணம்", "हर्षण"),
    Names::new("Vajram", "வஜ்ரம்", "वज्र"),
    Names::new("Siddhi", "சித்தி", "सिद्धि"),
    Names::new("Vyatheepatham", "வ்யதீபாதம்", "व्यतीपात"),
    Names::new("Vareeyan", "வரீயான்", "वरीयान"),
    Names::new("Parigam", "பரிகம்", "परिघ"),
    Names::new("Sivam", "சிவம்", "शिव"),
    Names::new("Siddham", "சித்தம்", "सिद्ध"),
    Names::new("Sadhyam", "சாத்தியம்", "साध्य"),
    Names::new("Subam", "சுபம்", "शुभ"),
    Names::new("Suklam", "சுக்லம்", "शुक्ल"),
    Names::new("Brahmam", "ப்ரம்மம்", "ब्रह्म"),
    Names::new("Indram", "இந்திரம்", "इन्द्र"),
    Names::new("Vaidhrithi", "வைத்ருதி", "वैधृति"),
];

/// Yoga at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YogaInfo {
    /// 1-based yoga number (1 = Vishkambam .. 27 = Vaidhrithi).
    pub number: u8,
}

impl YogaInfo {
    /// Build from a 1-based number; `None` outside 1..=27.
    pub fn from_number(number: u8) -> Option<Self> {
        (1..=27).contains(&number).then_some(Self { number })
    }

    pub const fn names(&self) -> Names {
        YOGA_NAMES[(self.number as usize + 26) % 27]
    }
}

/// Moon plus Sun longitude, reduced to [0, 360) by full modulo.
///
/// Two longitudes just under 360 sum to nearly 720; a single subtraction
/// of 360 would leave the sum out of range.
pub fn longitude_sum_deg(moon_lon_deg: f64, sun_lon_deg: f64) -> f64 {
    normalize_360(moon_lon_deg + sun_lon_deg)
}

/// Yoga from Moon and Sun longitudes.
pub fn yoga_from_longitudes(moon_lon_deg: f64, sun_lon_deg: f64) -> YogaInfo {
    YogaInfo {
        number: sector_index(longitude_sum_deg(moon_lon_deg, sun_lon_deg), 27) + 1,
    }
}
