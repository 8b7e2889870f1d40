//! Data model for pitch-accent data.
//!
//! These structures describe a word's morae, its High/Low accent pattern
//! and the dictionary entries that pair a reading with a pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One rhythmic beat of Japanese speech: a base kana, optionally fused with
/// a following small kana (e.g. "しゅ").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mora(String);

impl Mora {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base character and, for fused morae, the combining small kana.
    pub fn parts(&self) -> (char, Option<char>) {
        let mut chars = self.0.chars();
        // Mora values are only built from at least one character.
        let base = chars.next().unwrap_or_default();
        (base, chars.next())
    }

    pub fn is_fused(&self) -> bool {
        self.parts().1.is_some()
    }
}

impl fmt::Display for Mora {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Mora {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Pitch level at a mora boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pitch {
    High,
    Low,
}

impl Pitch {
    /// `H`, `h`, `1`, `2` are High; `L`, `l`, `0` are Low. Anything else is
    /// not a pitch symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'H' | 'h' | '1' | '2' => Some(Pitch::High),
            'L' | 'l' | '0' => Some(Pitch::Low),
            _ => None,
        }
    }
}

/// A High/Low sequence, one symbol longer than the morae it describes.
///
/// The raw text is kept as-is so malformed dictionary data survives a
/// round trip; symbol classification happens on access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccentPattern(String);

impl AccentPattern {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (characters).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pitch of each symbol; `None` for characters outside both classes.
    pub fn pitches(&self) -> impl Iterator<Item = Option<Pitch>> + '_ {
        self.0.chars().map(Pitch::from_symbol)
    }

    /// Drop the lowercase `h`/`l` marks some dictionaries use for
    /// secondary variants, leaving the primary contour.
    pub fn without_lowercase_marks(&self) -> Self {
        Self(self.0.chars().filter(|c| !matches!(c, 'h' | 'l')).collect())
    }
}

impl fmt::Display for AccentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccentPattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Pitch-accent shape category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentShape {
    /// No drop anywhere (flat)
    Heiban,
    /// Drop right after the first mora
    Atamadaka,
    /// Drop at the trailing boundary
    Odaka,
    /// Drop strictly inside the word
    Nakadaka,
    /// Multiple rises and drops
    Kifuku,
}

impl AccentShape {
    /// Lowercase name, as used for the diagram's CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            AccentShape::Heiban => "heiban",
            AccentShape::Atamadaka => "atamadaka",
            AccentShape::Odaka => "odaka",
            AccentShape::Nakadaka => "nakadaka",
            AccentShape::Kifuku => "kifuku",
        }
    }
}

impl fmt::Display for AccentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known (reading, pattern) pair for some orthographic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccentEntry {
    /// Reading in hiragana, or katakana for katakana headwords
    pub reading: String,
    pub pattern: AccentPattern,
}

impl AccentEntry {
    pub fn new(reading: impl Into<String>, pattern: impl Into<AccentPattern>) -> Self {
        Self {
            reading: reading.into(),
            pattern: pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_classes() {
        for c in ['H', 'h', '1', '2'] {
            assert_eq!(Pitch::from_symbol(c), Some(Pitch::High));
        }
        for c in ['L', 'l', '0'] {
            assert_eq!(Pitch::from_symbol(c), Some(Pitch::Low));
        }
        assert_eq!(Pitch::from_symbol('x'), None);
        assert_eq!(Pitch::from_symbol(','), None);
    }

    #[test]
    fn lowercase_marks_are_dropped() {
        let patt = AccentPattern::new("LHhlL");
        assert_eq!(patt.without_lowercase_marks().as_str(), "LHL");
    }

    #[test]
    fn shape_serializes_lowercase() {
        let json = serde_json::to_string(&AccentShape::Nakadaka).unwrap();
        assert_eq!(json, "\"nakadaka\"");
    }
}
