//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Output is compact (no whitespace between elements) so diagrams can be
//! dropped into a note field as a single run of markup.

use super::constants::*;

/// Direction of a connecting segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stroke {
    Straight,
    Up,
    Down,
}

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    class: String,
    width: i64,
    height: i64,
}

impl SvgBuilder {
    pub(super) fn new(class: &str, width: i64, height: i64) -> Self {
        Self {
            elements: Vec::new(),
            class: class.to_string(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg class="{}" viewBox="0 0 {} {}">"#,
            self.class, self.width, self.height
        );
        for el in &self.elements {
            svg.push_str(el);
        }
        svg.push_str("</svg>");
        svg
    }

    pub(super) fn text(&mut self, x: i64, content: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}">{}</text>"#,
            x,
            TEXT_BASELINE,
            escape(content)
        ));
    }

    /// Smaller-styled text for the combining kana of a fused mora.
    pub(super) fn small_text(&mut self, x: i64, content: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" class="{}">{}</text>"#,
            x,
            TEXT_BASELINE,
            SMALL_KANA_CLASS,
            escape(content)
        ));
    }

    /// Straight segment one step to the right of (x, y).
    pub(super) fn path(&mut self, x: i64, y: i64, stroke: Stroke, step: i64) {
        let dy = match stroke {
            Stroke::Straight => 0,
            Stroke::Up => -(LOW_Y - HIGH_Y),
            Stroke::Down => LOW_Y - HIGH_Y,
        };
        self.elements.push(format!(
            r#"<path d="m {},{} {},{}" stroke-width="{}" />"#,
            x, y, step, dy, STROKE_WIDTH
        ));
    }

    /// Filled marker, or ring-plus-dot when `open`.
    pub(super) fn circle(&mut self, cx: i64, cy: i64, open: bool) {
        let mut el = format!(r#"<circle r="{}" cx="{}" cy="{}" />"#, CIRCLE_RADIUS, cx, cy);
        if open {
            el.push_str(&format!(
                r#"<circle r="{}" cx="{}" cy="{}" />"#,
                INNER_CIRCLE_RADIUS, cx, cy
            ));
        }
        self.elements.push(el);
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
