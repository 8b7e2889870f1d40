//! Pitch renderer — converts a word and its accent pattern into SVG output.
//!
//! Each mora gets a horizontal position; each pattern symbol gets a marker
//! at that position, raised for High and lowered for Low, joined by straight
//! segments. Markers past the last mora (the trailing boundary and any
//! overflow) are drawn open.

mod constants;
mod svg_builder;

use tracing::warn;

use crate::classify::classify;
use crate::model::{AccentPattern, Pitch};
use crate::mora::segment;
use constants::*;
use svg_builder::{Stroke, SvgBuilder};

/// Rendering switches. Both default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suppress the diagnostic for a pattern that is not one symbol longer
    /// than the mora count.
    pub tolerate_length_mismatch: bool,
    /// Label any pattern with a drop as `kifuku`.
    pub treat_as_kifuku: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a pitch-accent diagram for `word` (kana) with `pattern`.
///
/// ```
/// use pitchlib::render;
///
/// let svg = render("はし", "HLL", false);
/// assert!(svg.starts_with(r#"<svg class="pitch atamadaka" viewBox="0 0 102 75">"#));
/// ```
pub fn render(word: &str, pattern: &str, tolerate_length_mismatch: bool) -> String {
    render_with(
        word,
        &AccentPattern::new(pattern),
        RenderOptions {
            tolerate_length_mismatch,
            ..RenderOptions::default()
        },
    )
}

/// Render with explicit options. Never fails; mismatched input is drawn
/// best-effort over `max(morae, symbols)` positions.
pub fn render_with(word: &str, pattern: &AccentPattern, options: RenderOptions) -> String {
    let morae = segment(word);
    let symbols = pattern.len();

    if symbols != morae.len() + 1 && !options.tolerate_length_mismatch {
        warn!(
            word,
            pattern = pattern.as_str(),
            morae = morae.len(),
            symbols,
            "pattern should be number of morae + 1"
        );
    }

    let positions = morae.len().max(symbols) as i64;
    let width = ((positions - 1) * STEP_WIDTH + MARGIN_LR * 2).max(0);

    let shape = classify(pattern, options.treat_as_kifuku);
    let mut svg = SvgBuilder::new(&format!("{BASE_CLASS} {shape}"), width, CANVAS_HEIGHT);

    // Labels
    for (pos, mora) in morae.iter().enumerate() {
        let x = x_center(pos) + TEXT_OFFSET_X;
        match mora.parts() {
            (base, Some(small)) => {
                svg.text(x + FUSED_BASE_OFFSET_X, base.encode_utf8(&mut [0; 4]));
                svg.small_text(x + FUSED_SMALL_OFFSET_X, small.encode_utf8(&mut [0; 4]));
            }
            (_, None) => svg.text(x, mora.as_str()),
        }
    }

    let points: Vec<(i64, i64)> = pattern
        .pitches()
        .enumerate()
        .map(|(pos, pitch)| (x_center(pos), y_center(pitch)))
        .collect();

    let unknown = pattern.pitches().filter(Option::is_none).count();
    if unknown > 0 {
        warn!(pattern = pattern.as_str(), unknown, "unknown pitch symbols drawn as Low");
    }

    // Connecting segments go under the markers.
    for pair in points.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let stroke = if prev.1 == cur.1 {
            Stroke::Straight
        } else if prev.1 < cur.1 {
            Stroke::Down
        } else {
            Stroke::Up
        };
        svg.path(prev.0, prev.1, stroke, STEP_WIDTH);
    }

    for (pos, &(x, y)) in points.iter().enumerate() {
        svg.circle(x, y, pos >= morae.len());
    }

    svg.build()
}

// ═══════════════════════════════════════════════════════════════════════
// Geometry
// ═══════════════════════════════════════════════════════════════════════

fn x_center(pos: usize) -> i64 {
    MARGIN_LR + pos as i64 * STEP_WIDTH
}

fn y_center(pitch: Option<Pitch>) -> i64 {
    match pitch {
        Some(Pitch::High) => HIGH_Y,
        Some(Pitch::Low) | None => LOW_Y,
    }
}
