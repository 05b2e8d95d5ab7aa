//! Date-range scan for special days.

use chrono::{Days, FixedOffset, NaiveDate};
use log::debug;
use tirtha_ephem::Ephemeris;
use tirtha_time::utc_offset;

use crate::config::PanchangConfig;
use crate::error::PanchangError;
use crate::festival::{DayKey, north_indian_special_day, tamil_special_day};
use crate::nakshatra::nakshatra_from_longitude;
use crate::panchang::positions;
use crate::panchang_types::{SpecialDayEntry, Variant};
use crate::tithi::tithi_from_longitudes;
use crate::vara::weekday_index;

/// Special-day key for one date. Only Sun and Moon are queried.
fn day_key_for<E: Ephemeris + ?Sized>(
    ephem: &E,
    date: NaiveDate,
    offset: FixedOffset,
    config: &PanchangConfig,
) -> Result<DayKey, PanchangError> {
    let pos = positions(ephem, date, offset, config)?;
    Ok(DayKey {
        tithi: tithi_from_longitudes(pos.moon_lon, pos.sun_lon),
        nakshatra: nakshatra_from_longitude(config.zodiac.apply(pos.moon_lon, pos.jd)),
        weekday: weekday_index(date),
    })
}

/// Dates in `[start, start + days)` that carry a special-day name.
///
/// Entries are in date order. The name is in the variant's script.
pub fn search_special_days<E: Ephemeris + ?Sized>(
    ephem: &E,
    start: NaiveDate,
    days: u32,
    variant: Variant,
    config: &PanchangConfig,
) -> Result<Vec<SpecialDayEntry>, PanchangError> {
    config.validate()?;
    let offset = utc_offset(config.utc_offset_minutes)?;

    let mut found = Vec::new();
    for i in 0..days {
        let date = start
            .checked_add_days(Days::new(u64::from(i)))
            .ok_or_else(|| PanchangError::InvalidDate(format!("{start} + {i} days")))?;
        let key = day_key_for(ephem, date, offset, config)?;
        let name = match variant {
            Variant::Tamil => tamil_special_day(&key),
            Variant::NorthIndian => north_indian_special_day(&key),
        };
        if let Some(name) = name {
            debug!("{date}: {}", name.english);
            found.push(SpecialDayEntry { date, name });
        }
    }
    Ok(found)
}
