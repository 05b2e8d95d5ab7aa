//! Karana (half-tithi).
//!
//! Each 6 deg of elongation is one karana. The traditional month runs 4
//! fixed karanas around the new moon and 7 movable ones repeated 8 times;
//! here the 11 names are folded with a flat modulo-11 over the 60 half-tithi
//! steps instead. Do not change this without calibrating against a printed
//! almanac.

use serde::Serialize;

use crate::names::Names;
use crate::util::normalize_360;

/// Elongation covered by one karana, in degrees.
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// Karana names, index 0 = Bavam.
pub const KARANA_NAMES: [Names; 11] = [
    Names::new("Bavam", "பவம்", "बव"),
    Names::new("Balavam", "பாலவம்", "बालव"),
    Names::new("Kaulavam", "கௌலவம்", "कौलव"),
    Names::new("Thaitulam", "தைதுலம்", "तैतिल"),
    Names::new("Garam", "கரம்", "गर"),
    Names::new("Vanijam", "வணிஜம்", "वणिज"),
    Names::new("Vishti", "விஷ்டி", "विष्टि"),
    Names::new("Sakuni", "சகுனி", "शकुनि"),
    Names::new("Chatushpadam", "சதுஷ்பாதம்", "चतुष्पद"),
    Names::new("Nagam", "நாகம்", "नाग"),
    Names::new("Kimsthughnam", "கிம்ஸ்துக்னம்", "किंस्तुघ्न"),
];

/// Karana at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KaranaInfo {
    /// 0-based index into [`KARANA_NAMES`] (0..=10).
    pub index: u8,
}

impl KaranaInfo {
    pub const fn names(&self) -> Names {
        KARANA_NAMES[self.index as usize % 11]
    }
}

/// Karana from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let step = (normalize_360(elongation_deg) / KARANA_SPAN_DEG).floor() as u32;
    KaranaInfo {
        index: (step.min(59) % 11) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_steps() {
        assert_eq!(karana_from_elongation(0.0).names().latin, "Bavam");
        assert_eq!(karana_from_elongation(6.0).names().latin, "Balavam");
        assert_eq!(karana_from_elongation(65.9).names().latin, "Kimsthughnam");
    }

    #[test]
    fn folds_after_eleven() {
        // step 11 (66 deg) folds back to Bavam
        assert_eq!(karana_from_elongation(66.0).index, 0);
        // step 59 (354 deg): 59 mod 11 = 4
        assert_eq!(karana_from_elongation(355.0).index, 4);
    }

    #[test]
    fn always_in_table() {
        let mut e = -30.0;
        while e < 400.0 {
            assert!(karana_from_elongation(e).index <= 10);
            e += 0.7;
        }
    }
}
