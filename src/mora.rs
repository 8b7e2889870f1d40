//! Mora segmentation.

use crate::model::Mora;

/// Small kana that fuse with the preceding kana into a single mora.
pub const COMBINING_KANA: [char; 16] = [
    'ゃ', 'ゅ', 'ょ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ',
    'ャ', 'ュ', 'ョ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ',
];

pub fn is_combining(c: char) -> bool {
    COMBINING_KANA.contains(&c)
}

/// Split a kana string into morae.
///
/// A character followed by a combining small kana is fused with it; every
/// other character becomes its own mora. Non-kana input passes through as
/// single-character morae.
///
/// ```
/// use pitchlib::segment;
///
/// let morae = segment("しゅんかしゅうとう");
/// assert_eq!(morae, ["しゅ", "ん", "か", "しゅ", "う", "と", "う"]);
/// ```
pub fn segment(text: &str) -> Vec<Mora> {
    let chars: Vec<char> = text.chars().collect();
    let mut morae = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() && is_combining(chars[i + 1]) {
            morae.push(Mora::new([chars[i], chars[i + 1]].iter().collect()));
            i += 2;
        } else {
            morae.push(Mora::new(chars[i].to_string()));
            i += 1;
        }
    }

    morae
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuses_small_kana() {
        let morae = segment("しゅんかしゅうとう");
        assert_eq!(morae, ["しゅ", "ん", "か", "しゅ", "う", "と", "う"]);
    }

    #[test]
    fn katakana_combiners() {
        let morae = segment("ティーシャツ");
        assert_eq!(morae, ["ティ", "ー", "シャ", "ツ"]);
    }

    #[test]
    fn round_trips_and_never_grows() {
        for s in ["", "は", "きょう", "ぁぁ", "abc", "にっぽん", "ゃ"] {
            let morae = segment(s);
            assert!(morae.len() <= s.chars().count());
            let joined: String = morae.iter().map(Mora::as_str).collect();
            assert_eq!(joined, s);
        }
    }

    #[test]
    fn leading_combiner_stands_alone() {
        // A combiner fuses with whatever precedes it, even another combiner.
        assert_eq!(segment("ゃゃ"), ["ゃゃ"]);
        assert_eq!(segment("ゃ"), ["ゃ"]);
    }
}
