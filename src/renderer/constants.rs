//! Shared constants for the pitch renderer (all in SVG user units).

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const STEP_WIDTH: i64 = 35; // horizontal distance between positions
pub(super) const MARGIN_LR: i64 = 16;
pub(super) const CANVAS_HEIGHT: i64 = 75;

// ── Pitch levels ────────────────────────────────────────────────────
pub(super) const HIGH_Y: i64 = 5;
pub(super) const LOW_Y: i64 = 30;

// ── Text ────────────────────────────────────────────────────────────
// Letter positioning tested with Noto Sans CJK JP.
pub(super) const TEXT_BASELINE: &str = "67.5";
pub(super) const TEXT_OFFSET_X: i64 = -11; // label anchor relative to the position center
pub(super) const FUSED_BASE_OFFSET_X: i64 = -5;
pub(super) const FUSED_SMALL_OFFSET_X: i64 = 12;
pub(super) const SMALL_KANA_CLASS: &str = "youon";

// ── Markers & lines ─────────────────────────────────────────────────
pub(super) const CIRCLE_RADIUS: &str = "5";
pub(super) const INNER_CIRCLE_RADIUS: &str = "3.25";
pub(super) const STROKE_WIDTH: &str = "1.5";

// ── Root element ────────────────────────────────────────────────────
pub(super) const BASE_CLASS: &str = "pitch";
