//! Kana script helpers.

/// Code point distance between a hiragana and its katakana counterpart.
const KANA_DIFF: u32 = 0x60;

/// Convert hiragana (ぁ..=ゔ) to katakana; other characters pass through.
pub fn hiragana_to_katakana(text: &str) -> String {
    let mut new_text = String::with_capacity(text.len());
    for ch in text.chars() {
        new_text.push(if ('ぁ'..='ゔ').contains(&ch) {
            char::from_u32(ch as u32 + KANA_DIFF).unwrap_or(ch)
        } else {
            ch
        });
    }
    new_text
}

/// True if more than half of the characters are katakana (ァ..=ヴ) or the
/// lengthening mark ー.
pub fn is_mostly_katakana(text: &str) -> bool {
    let total = text.chars().count().max(1);
    let katakana = text
        .chars()
        .filter(|&ch| ch == 'ー' || ('ァ'..='ヴ').contains(&ch))
        .count();
    katakana * 2 > total
}
