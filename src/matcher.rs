//! Pattern matching — picks the best dictionary candidate for an
//! (expression, reading) pair.

use tracing::debug;

use crate::dictionary::AccentLookup;
use crate::model::AccentEntry;

/// Select the best (reading, pattern) entry for a cleaned expression and
/// reading. Returns `None` when no dictionary knows the expression.
///
/// Dictionaries are tried in order. Within each, the keys tried are the
/// whole expression, its first space-delimited token, and the first token
/// after turning `<` and `&` into spaces. The first key with candidates
/// decides.
pub fn match_pattern<'a, D: AccentLookup>(
    expression: &str,
    reading: &str,
    dictionaries: &'a [D],
) -> Option<&'a AccentEntry> {
    if expression.is_empty() {
        return None;
    }

    let keys = lookup_keys(expression);
    for (idx, dict) in dictionaries.iter().enumerate() {
        for key in &keys {
            if let Some(best) = dict.lookup(key).and_then(|c| select_best(reading, c)) {
                debug!(dictionary = idx, key = %key, reading = %best.reading, pattern = %best.pattern, "matched");
                return Some(best);
            }
        }
    }

    debug!(expression, "no accent data");
    None
}

/// Key attempts, from strictest to loosest.
fn lookup_keys(expression: &str) -> [String; 3] {
    let first_token = expression.split(' ').next().unwrap_or_default();
    let unmarked = expression.replace(['<', '&'], " ");
    let first_unmarked = unmarked.split(' ').next().unwrap_or_default();
    [
        expression.to_string(),
        first_token.to_string(),
        first_unmarked.to_string(),
    ]
}

/// The candidate whose reading occurs earliest in `reading`; the first
/// candidate if none occur. `None` only for an empty list.
pub fn select_best<'a>(reading: &str, candidates: &'a [AccentEntry]) -> Option<&'a AccentEntry> {
    let mut best = candidates.first()?;
    let mut best_pos = usize::MAX;

    for candidate in candidates {
        if let Some(pos) = reading.find(candidate.reading.as_str()) {
            if pos < best_pos {
                best = candidate;
                best_pos = pos;
            }
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::AccentDictionary;

    #[test]
    fn earliest_reading_wins() {
        let candidates = [
            AccentEntry::new("は", "HL"),
            AccentEntry::new("はし", "LHL"),
            AccentEntry::new("し", "HL"),
        ];
        let best = select_best("はし", &candidates).unwrap();
        // "は" and "はし" both occur at 0; the earlier candidate keeps the spot
        assert_eq!(best, &candidates[0]);

        let best = select_best("いし", &candidates).unwrap();
        assert_eq!(best, &candidates[2]);
    }

    #[test]
    fn falls_back_to_first_candidate() {
        let candidates = [AccentEntry::new("かわ", "LHH"), AccentEntry::new("がわ", "LHH")];
        assert_eq!(select_best("やま", &candidates).unwrap(), &candidates[0]);
        assert_eq!(select_best("やま", &[]), None);
    }

    #[test]
    fn key_attempts() {
        assert_eq!(lookup_keys("橋 bridge"), ["橋 bridge", "橋", "橋"]);
        assert_eq!(lookup_keys("橋<br>"), ["橋<br>", "橋<br>", "橋"]);
        assert_eq!(lookup_keys("橋&nbsp;x"), ["橋&nbsp;x", "橋&nbsp;x", "橋"]);
    }

    #[test]
    fn empty_expression_is_not_found() {
        let dict = AccentDictionary::parse_user("橋\tはし\tLHL").unwrap();
        assert_eq!(match_pattern("", "はし", &[dict]), None);
    }
}
