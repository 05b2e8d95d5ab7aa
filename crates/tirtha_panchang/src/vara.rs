//! Vara (weekday) names.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::names::Names;

/// Weekday names, index 0 = Sunday.
pub const VARA_NAMES: [Names; 7] = [
    Names::new("Nyayiru", "ஞாயிற்றுக்கிழமை", "रविवार"),
    Names::new("Thingal", "திங்கட்கிழமை", "सोमवार"),
    Names::new("Sevvai", "செவ்வாய்க்கிழமை", "मंगलवार"),
    Names::new("Budhan", "புதன்கிழமை", "बुधवार"),
    Names::new("Viyazhan", "வியாழக்கிழமை", "गुरुवार"),
    Names::new("Velli", "வெள்ளிக்கிழமை", "शुक्रवार"),
    Names::new("Sani", "சனிக்கிழமை", "शनिवार"),
];

/// Weekday index of a civil date, 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Weekday from an index, wrapping modulo 7.
pub fn weekday_from_index(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

pub fn vara_names(weekday: u8) -> Names {
    VARA_NAMES[usize::from(weekday) % 7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dates() {
        // 2024-01-14 was a Sunday, 2024-01-19 a Friday
        let sun = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(weekday_index(sun), 0);
        assert_eq!(vara_names(weekday_index(sun)).latin, "Nyayiru");
        let fri = NaiveDate::from_ymd_opt(2024, 1, 19).unwrap();
        assert_eq!(weekday_index(fri), 5);
        assert_eq!(vara_names(5).hindi, "शुक्रवार");
    }

    #[test]
    fn index_round_trip() {
        for i in 0..7u8 {
            assert_eq!(weekday_from_index(i).num_days_from_sunday() as u8, i);
        }
    }
}
