//! Panchang configuration.

use tirtha_time::{EvaluationInstant, IST_OFFSET_MINUTES, MAX_OFFSET_MINUTES};

use crate::ayanamsha::Zodiac;
use crate::error::PanchangError;

/// Sunrise text used when no sunrise can be computed.
pub const FALLBACK_SUNRISE: &str = "06:00 AM";

/// Sunset text used when no sunset can be computed.
pub const FALLBACK_SUNSET: &str = "06:30 PM";

/// Longest accepted rise/set search window in days.
pub const MAX_RISE_SET_WINDOW_DAYS: f64 = 7.0;

/// Configuration for panchang computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangConfig {
    /// Time of day at which each civil date is evaluated.
    pub instant: EvaluationInstant,
    /// Civil UTC offset in minutes east of Greenwich. Default: +330 (IST).
    pub utc_offset_minutes: i32,
    /// Zodiac for nakshatra, yoga and solar month. Default: tropical.
    pub zodiac: Zodiac,
    /// Sunrise/sunset search window from local midnight, days. Default: 1.
    pub rise_set_window_days: f64,
    /// Sunrise text when the search fails or finds nothing.
    pub fallback_sunrise: String,
    /// Sunset text when the search fails or finds nothing.
    pub fallback_sunset: String,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            instant: EvaluationInstant::default(),
            utc_offset_minutes: IST_OFFSET_MINUTES,
            zodiac: Zodiac::default(),
            rise_set_window_days: 1.0,
            fallback_sunrise: FALLBACK_SUNRISE.to_string(),
            fallback_sunset: FALLBACK_SUNSET.to_string(),
        }
    }
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), PanchangError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(PanchangError::InvalidConfig(
                "utc_offset_minutes must be within ±1080",
            ));
        }
        if !self.rise_set_window_days.is_finite()
            || self.rise_set_window_days <= 0.0
            || self.rise_set_window_days > MAX_RISE_SET_WINDOW_DAYS
        {
            return Err(PanchangError::InvalidConfig(
                "rise_set_window_days must be in (0, 7]",
            ));
        }
        Ok(())
    }
}
