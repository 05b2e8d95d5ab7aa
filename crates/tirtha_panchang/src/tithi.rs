//! Tithi (lunar day) and Paksha (fortnight).
//!
//! A tithi is each 12 deg of Moon-Sun elongation: 30 per synodic month.
//! Tithis 1-15 fall in Shukla (waxing) paksha ending at Pournami; tithis
//! 16-30 in Krishna (waning) paksha ending at Amavasai. The names of the
//! two halves mirror each other except for the last entry.

use serde::Serialize;

use crate::names::Names;
use crate::util::{normalize_360, sector_index};

/// Tithi names, index 0 = tithi 1 (Shukla Prathama).
pub const TITHI_NAMES: [Names; 30] = [
    Names::new("Prathama", "பிரதமை", "प्रतिपदा"),
    Names::new("Dvitiya", "துவிதியை", "द्वितीया"),
    Names::new("Tritiya", "திருதியை", "तृतीया"),
    Names::new("Chaturthi", "சதுர்த்தி", "चतुर्थी"),
    Names::new("Panchami", "பஞ்சமி", "पंचमी"),
    Names::new("Shashti", "சஷ்டி", "षष्ठी"),
    Names::new("Saptami", "சப்தமி", "सप्तमी"),
    Names::new("Ashtami", "அஷ்டமி", "अष्टमी"),
    Names::new("Navami", "நவமி", "नवमी"),
    Names::new("Dasami", "தசமி", "दशमी"),
    Names::new("Ekadasi", "ஏகாதசி", "एकादशी"),
    Names::new("Dwadasi", "துவாதசி", "द्वादशी"),
    Names::new("Trayodasi", "திரயோதசி", "त्रयोदशी"),
    Names::new("Chaturdasi", "சதுர்தசி", "चतुर्दशी"),
    Names::new("Pournami", "பௌர்ணமி", "पूर्णिमा"),
    Names::new("Prathama", "பிரதமை", "प्रतिपदा"),
    Names::new("Dvitiya", "துவிதியை", "द्वितीया"),
    Names::new("Tritiya", "திருதியை", "तृतीया"),
    Names::new("Chaturthi", "சதுர்த்தி", "चतुर्थी"),
    Names::new("Panchami", "பஞ்சமி", "पंचमी"),
    Names::new("Shashti", "சஷ்டி", "षष्ठी"),
    Names::new("Saptami", "சப்தமி", "सप्तमी"),
    Names::new("Ashtami", "அஷ்டமி", "अष्टमी"),
    Names::new("Navami", "நவமி", "नवमी"),
    Names::new("Dasami", "தசமி", "दशमी"),
    Names::new("Ekadasi", "ஏகாதசி", "एकादशी"),
    Names::new("Dwadasi", "துவாதசி", "द्वादशी"),
    Names::new("Trayodasi", "திரயோதசி", "त्रयोदशी"),
    Names::new("Chaturdasi", "சதுர்தசி", "चतुर्दशी"),
    Names::new("Amavasai", "அமாவாசை", "अमावस्या"),
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing (bright) half, tithis 1-15.
    Shukla,
    /// Waning (dark) half, tithis 16-30.
    Krishna,
}

const PAKSHA_NAMES: [Names; 2] = [
    Names::new("Sukla Paksham", "சுக்ல பட்சம்", "शुक्ल पक्ष"),
    Names::new("Krishna Paksham", "கிருஷ்ண பட்சம்", "कृष्ण पक्ष"),
];

impl Paksha {
    /// 0 for Shukla, 1 for Krishna.
    pub const fn index(self) -> u8 {
        match self {
            Self::Shukla => 0,
            Self::Krishna => 1,
        }
    }

    pub const fn names(self) -> Names {
        PAKSHA_NAMES[self.index() as usize]
    }
}

/// Tithi at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TithiInfo {
    /// 1-based tithi number (1..=30).
    pub number: u8,
    pub paksha: Paksha,
}

impl TithiInfo {
    /// Build from a 1-based number; `None` outside 1..=30.
    pub fn from_number(number: u8) -> Option<Self> {
        if !(1..=30).contains(&number) {
            return None;
        }
        let paksha = if number <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        };
        Some(Self { number, paksha })
    }

    /// 1-based position inside the paksha (1..=15).
    pub const fn tithi_in_paksha(&self) -> u8 {
        self.number.saturating_sub(1) % 15 + 1
    }

    pub const fn names(&self) -> Names {
        TITHI_NAMES[(self.number as usize + 29) % 30]
    }

    /// Pournami, the full-moon tithi.
    pub const fn is_full_moon(&self) -> bool {
        self.number == 15
    }

    /// Amavasai, the new-moon tithi.
    pub const fn is_new_moon(&self) -> bool {
        self.number == 30
    }
}

/// Moon minus Sun longitude, normalized to [0, 360).
pub fn elongation_deg(moon_lon_deg: f64, sun_lon_deg: f64) -> f64 {
    normalize_360(moon_lon_deg - sun_lon_deg)
}

/// Tithi from Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let number = sector_index(elongation_deg, 30) + 1;
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo { number, paksha }
}

/// Tithi from Moon and Sun longitudes.
pub fn tithi_from_longitudes(moon_lon_deg: f64, sun_lon_deg: f64) -> TithiInfo {
    tithi_from_elongation(elongation_deg(moon_lon_deg, sun_lon_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_200_sun_90_is_shukla_dasami() {
        let t = tithi_from_longitudes(200.0, 90.0);
        assert_eq!(t.number, 10);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.names().latin, "Dasami");
    }

    #[test]
    fn boundaries() {
        assert_eq!(tithi_from_elongation(0.0).number, 1);
        assert_eq!(tithi_from_elongation(11.999).number, 1);
        assert_eq!(tithi_from_elongation(12.0).number, 2);
        assert_eq!(tithi_from_elongation(179.999).number, 15);
        assert_eq!(tithi_from_elongation(180.0).number, 16);
        assert_eq!(tithi_from_elongation(359.999).number, 30);
    }

    #[test]
    fn negative_elongation_wraps() {
        // Moon just behind the Sun: last tithi of the month
        let t = tithi_from_longitudes(5.0, 10.0);
        assert_eq!(t.number, 30);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert!(t.is_new_moon());
    }

    #[test]
    fn full_and_new_names() {
        let full = TithiInfo::from_number(15).unwrap();
        assert!(full.is_full_moon());
        assert_eq!(full.paksha, Paksha::Shukla);
        assert_eq!(full.names().tamil, "பௌர்ணமி");
        assert_eq!(full.names().hindi, "पूर्णिमा");
        let new = TithiInfo::from_number(30).unwrap();
        assert_eq!(new.paksha, Paksha::Krishna);
        assert_eq!(new.names().latin, "Amavasai");
        assert_eq!(new.names().hindi, "अमावस्या");
    }

    #[test]
    fn halves_mirror_except_last() {
        for i in 0..14 {
            assert_eq!(TITHI_NAMES[i], TITHI_NAMES[i + 15]);
        }
        assert_ne!(TITHI_NAMES[14], TITHI_NAMES[29]);
    }

    #[test]
    fn position_in_paksha() {
        assert_eq!(TithiInfo::from_number(1).unwrap().tithi_in_paksha(), 1);
        assert_eq!(TithiInfo::from_number(15).unwrap().tithi_in_paksha(), 15);
        assert_eq!(TithiInfo::from_number(16).unwrap().tithi_in_paksha(), 1);
        assert_eq!(TithiInfo::from_number(23).unwrap().tithi_in_paksha(), 8);
        assert_eq!(TithiInfo::from_number(30).unwrap().tithi_in_paksha(), 15);
    }

    #[test]
    fn from_number_range() {
        assert!(TithiInfo::from_number(0).is_none());
        assert!(TithiInfo::from_number(31).is_none());
    }

    #[test]
    fn paksha_names() {
        assert_eq!(Paksha::Shukla.names().latin, "Sukla Paksham");
        assert_eq!(Paksha::Krishna.names().hindi, "कृष्ण पक्ष");
    }
}
