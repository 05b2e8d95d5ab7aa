//! Eight-way moon phase classification.

use serde::Serialize;

use crate::names::Names;
use crate::util::normalize_360;

/// Width of one phase bucket in degrees.
pub const PHASE_BUCKET_DEG: f64 = 45.0;

/// Named moon phase, buckets centred on multiples of 45 deg of elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in order of increasing elongation.
pub const ALL_MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

const MOON_PHASE_NAMES: [Names; 8] = [
    Names::new("New Moon", "அமாவாசை", "अमावस्या"),
    Names::new("Waxing Crescent", "வளர்பிறை", "शुक्ल वर्धमान"),
    Names::new("First Quarter", "முதல் காலாண்டு", "प्रथम चतुर्थांश"),
    Names::new("Waxing Gibbous", "வளர்பிறை பெருநிலா", "शुक्ल वर्धमान गिब्बस"),
    Names::new("Full Moon", "பௌர்ணமி", "पूर्णिमा"),
    Names::new("Waning Gibbous", "தேய்பிறை பெருநிலா", "कृष्ण ह्रासमान गिब्बस"),
    Names::new("Last Quarter", "கடைசி காலாண்டு", "अंतिम चतुर्थांश"),
    Names::new("Waning Crescent", "தேய்பிறை", "कृष्ण ह्रासमान"),
];

impl MoonPhase {
    /// 0-based index (NewMoon=0 .. WaningCrescent=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    pub const fn names(self) -> Names {
        MOON_PHASE_NAMES[self.index() as usize]
    }

    /// Classify a phase angle (Moon-Sun elongation, 0 = new, 180 = full).
    ///
    /// Bucket `k` covers `[45k - 22.5, 45k + 22.5)`; the last half-bucket
    /// below 360 wraps back to New Moon.
    pub fn from_phase_angle(phase_angle_deg: f64) -> Self {
        let a = normalize_360(phase_angle_deg);
        let bucket = ((a + PHASE_BUCKET_DEG / 2.0) / PHASE_BUCKET_DEG).floor() as usize % 8;
        ALL_MOON_PHASES[bucket]
    }
}

/// Illuminated fraction as a whole percentage, clamped to 0..=100.
pub fn illumination_percent(phase_fraction: f64) -> u8 {
    if phase_fraction.is_nan() {
        return 0;
    }
    (phase_fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}
