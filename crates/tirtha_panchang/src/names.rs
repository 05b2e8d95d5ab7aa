//! Localized name types shared by every lookup table.

use serde::Serialize;

/// A name in Latin transliteration plus one regional script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocalizedName {
    /// Latin-script transliteration.
    pub english: &'static str,
    /// Tamil or Devanagari script, depending on the variant.
    pub native: &'static str,
}

impl LocalizedName {
    pub const fn new(english: &'static str, native: &'static str) -> Self {
        Self { english, native }
    }
}

/// Table entry carrying the transliteration and both regional scripts.
///
/// The transliteration follows Tamil usage and is shared by both
/// panchang variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Names {
    pub latin: &'static str,
    pub tamil: &'static str,
    pub hindi: &'static str,
}

impl Names {
    pub const fn new(latin: &'static str, tamil: &'static str, hindi: &'static str) -> Self {
        Self {
            latin,
            tamil,
            hindi,
        }
    }

    /// Transliteration paired with the Tamil script name.
    pub const fn tamil(&self) -> LocalizedName {
        LocalizedName::new(self.latin, self.tamil)
    }

    /// Transliteration paired with the Devanagari name.
    pub const fn hindi(&self) -> LocalizedName {
        LocalizedName::new(self.latin, self.hindi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections() {
        let n = Names::new("Velli", "வெள்ளிக்கிழமை", "शुक्रवार");
        assert_eq!(n.tamil(), LocalizedName::new("Velli", "வெள்ளிக்கிழமை"));
        assert_eq!(n.hindi().native, "शुक्रवार");
        assert_eq!(n.hindi().english, "Velli");
    }
}
