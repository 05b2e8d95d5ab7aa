//! Rahu Kaal, Yamagandam and Gulika Kaal.
//!
//! The 12 hours from a nominal 06:00 sunrise are cut into eight slots of
//! 1.5 hours; each window occupies one slot chosen by weekday. The actual
//! sunrise is not used.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use tirtha_time::format_decimal_hour;

/// Nominal start of the day in hours.
pub const DAY_START_HOUR: f64 = 6.0;

/// Length of one slot in hours.
pub const SLOT_HOURS: f64 = 1.5;

/// Inauspicious window kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KaalKind {
    RahuKaal,
    Yamagandam,
    GulikaKaal,
}

impl KaalKind {
    pub const ALL: [KaalKind; 3] = [Self::RahuKaal, Self::Yamagandam, Self::GulikaKaal];

    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamagandam => "Yamagandam",
            Self::GulikaKaal => "Gulika Kaal",
        }
    }

    /// 1-based slot for each weekday, Sunday first.
    pub const fn slots(self) -> [u8; 7] {
        match self {
            Self::RahuKaal => [8, 2, 7, 5, 6, 4, 3],
            Self::Yamagandam => [5, 4, 3, 2, 1, 7, 6],
            Self::GulikaKaal => [7, 6, 5, 4, 3, 2, 1],
        }
    }

    /// Slot (1..=8) for a weekday index (0 = Sunday).
    pub const fn slot(self, weekday: u8) -> u8 {
        self.slots()[(weekday % 7) as usize]
    }

    /// Window for a weekday index (0 = Sunday).
    pub fn window(self, weekday: u8) -> TimeWindow {
        TimeWindow::for_slot(self.slot(weekday))
    }
}

/// A span of clock hours within one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    /// Start in fractional hours after local midnight.
    pub start_hour: f64,
    /// End in fractional hours after local midnight.
    pub end_hour: f64,
}

impl TimeWindow {
    /// Window for a 1-based slot: `6 + 1.5 * (slot - 1)` for 1.5 hours.
    pub fn for_slot(slot: u8) -> Self {
        let start_hour = DAY_START_HOUR + f64::from(slot.saturating_sub(1)) * SLOT_HOURS;
        Self {
            start_hour,
            end_hour: start_hour + SLOT_HOURS,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_decimal_hour(self.start_hour),
            format_decimal_hour(self.end_hour)
        )
    }
}
