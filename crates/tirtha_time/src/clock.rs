//! 12-hour clock formatting.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Format a fractional hour of the day as `h:mm AM`/`h:mm PM`.
///
/// The hour is not zero-padded; 0h and 12h display as `12`. Minutes are
/// rounded to the nearest whole minute.
///
/// ```
/// use tirtha_time::format_decimal_hour;
///
/// assert_eq!("4:30 PM", format_decimal_hour(16.5));
/// assert_eq!("6:00 AM", format_decimal_hour(6.0));
/// ```
pub fn format_decimal_hour(hours: f64) -> String {
    let mut hour = hours.floor() as i64;
    let mut minute = ((hours - hours.floor()) * 60.0).round() as i64;
    if minute == 60 {
        hour += 1;
        minute = 0;
    }
    let hour = hour.rem_euclid(24);
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {period}")
}

/// Format an instant as zero-padded `hh:mm AM`/`hh:mm PM` in its own zone.
pub fn format_clock_12h<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%I:%M %p").to_string()
}
