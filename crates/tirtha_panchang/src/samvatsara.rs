//! Year naming: the Tamil 60-year cycle and Vikram Samvat.
//!
//! The Tamil cycle is anchored so that Gregorian 2000 sits at cycle
//! position 36. Both year numbers use the plain Gregorian year of the
//! civil date; the traditional new year in April is not modelled.

use crate::names::LocalizedName;

/// Cycle position of Gregorian year 2000.
pub const TAMIL_CYCLE_OFFSET_2000: i32 = 36;

/// Years between the Gregorian and Vikram Samvat eras.
pub const VIKRAM_SAMVAT_OFFSET: i32 = 57;

/// The 60 Tamil years, index 0 = Prabhava.
pub const TAMIL_YEARS: [LocalizedName; 60] = [
    LocalizedName::new("Prabhava", "பிரபவ"),
    LocalizedName::new("Vibhava", "விபவ"),
    LocalizedName::new("Shukla", "சுக்ல"),
    LocalizedName::new("Pramoduta", "பிரமோதூத"),
    LocalizedName::new("Prajotpatti", "பிரசோற்பத்தி"),
    LocalizedName::new("Angirasa", "ஆங்கீரச"),
    LocalizedName::new("Srimukha", "ஸ்ரீமுக"),
    LocalizedName::new("Bhava", "பவ"),
    LocalizedName::new("Yuva", "யுவ"),
    LocalizedName::new("Dhatu", "தாது"),
    LocalizedName::new("Eeshvara", "ஈஸ்வர"),
    LocalizedName::new("Vehudhanya", "வெகுதான்ய"),
    LocalizedName::new("Pramathi", "பிரமாதி"),
    LocalizedName::new("Vikrama", "விக்கிரம"),
    LocalizedName::new("Vishu", "விஷு"),
    LocalizedName::new("Chitrabhanu", "சித்திரபானு"),
    LocalizedName::new("Subhanu", "சுபானு"),
    LocalizedName::new("Dharana", "தாரண"),
    LocalizedName::new("Parthiba", "பார்த்திப"),
    LocalizedName::new("Viya", "விய"),
    LocalizedName::new("Sarvajittu", "சர்வசித்து"),
    LocalizedName::new("Sarvadhari", "சர்வதாரி"),
    LocalizedName::new("Virodhi", "விரோதி"),
    LocalizedName::new("Vikrithi", "விக்ருதி"),
    LocalizedName::new("Kara", "கர"),
    LocalizedName::new("Nandana", "நந்தன"),
    LocalizedName::new("Vijaya", "விஜய"),
    LocalizedName::new("Jaya", "ஜய"),
    LocalizedName::new("Manmatha", "மன்மத"),
    LocalizedName::new("Durmukhi", "துர்முகி"),
    LocalizedName::new("Hevilambi", "ஹேவிளம்பி"),
    LocalizedName::new("Vilambi", "விளம்பி"),
    LocalizedName::new("Vikari", "விகாரி"),
    LocalizedName::new("Sharvari", "சார்வரி"),
    LocalizedName::new("Plava", "பிலவ"),
    LocalizedName::new("Shubhakrithu", "சுபகிருது"),
    LocalizedName::new("Shobhakrithu", "சோபகிருது"),
    LocalizedName::new("Krodhi", "குரோதி"),
    LocalizedName::new("Vishvavasu", "விசுவாவசு"),
    LocalizedName::new("Parabhava", "பராபவ"),
    LocalizedName::new("Plavanga", "பிலவங்க"),
    LocalizedName::new("Keelaka", "கீலக"),
    LocalizedName::new("Sowmya", "சௌமிய"),
    LocalizedName::new("Sadharana", "சாதாரண"),
    LocalizedName::new("Virodhikrithu", "விரோதகிருது"),
    LocalizedName::new("Paridhaabi", "பரிதாபி"),
    LocalizedName::new("Pramadicha", "பிரமாதீச"),
    LocalizedName::new("Ananda", "ஆனந்த"),
    LocalizedName::new("Rakshasa", "ராட்சச"),
    LocalizedName::new("Nala", "நள"),
    LocalizedName::new("Pingala", "பிங்கள"),
    LocalizedName::new("Kalayukthi", "காளயுக்தி"),
    LocalizedName::new("Siddharthi", "சித்தார்த்தி"),
    LocalizedName::new("Raudri", "ரௌத்திரி"),
    LocalizedName::new("Durmathi", "துன்மதி"),
    LocalizedName::new("Dundhubhi", "துந்துபி"),
    LocalizedName::new("Rudhrodgari", "ருத்ரோத்காரி"),
    LocalizedName::new("Raktakshi", "ரக்தாட்சி"),
    LocalizedName::new("Krodhana", "குரோதன"),
    LocalizedName::new("Akshaya", "அட்சய"),
];

/// 0-based position of a Gregorian year in the Tamil 60-year cycle.
pub fn tamil_year_index(gregorian_year: i32) -> u8 {
    (i64::from(gregorian_year) - 2000 + i64::from(TAMIL_CYCLE_OFFSET_2000)).rem_euclid(60) as u8
}

/// Tamil year name for a Gregorian year.
pub fn tamil_year(gregorian_year: i32) -> LocalizedName {
    TAMIL_YEARS[usize::from(tamil_year_index(gregorian_year))]
}

/// Vikram Samvat era year for a Gregorian year. Saturates at `i32::MAX`.
pub fn vikram_samvat(gregorian_year: i32) -> i32 {
    gregorian_year.saturating_add(VIKRAM_SAMVAT_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_position() {
        assert_eq!(tamil_year_index(2000), 36);
        assert_eq!(tamil_year(2000).english, "Shobhakrithu");
    }

    #[test]
    fn year_2024() {
        assert_eq!(tamil_year_index(2024), 0);
        assert_eq!(tamil_year(2024).english, "Prabhava");
    }

    #[test]
    fn period_sixty() {
        for y in [-500, 0, 1899, 1987, 2000, 2023, 2100, 9999] {
            assert_eq!(tamil_year_index(y), tamil_year_index(y + 60), "year {y}");
            assert!(tamil_year_index(y) < 60);
        }
    }

    #[test]
    fn before_epoch_is_non_negative() {
        assert_eq!(tamil_year_index(1963), 59);
        assert_eq!(tamil_year(1963).english, "Akshaya");
    }

    #[test]
    fn samvat_offset() {
        assert_eq!(vikram_samvat(2024), 2081);
        assert_eq!(vikram_samvat(-57), 0);
    }
}
