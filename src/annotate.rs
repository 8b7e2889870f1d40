//! Diagram insertion and removal in note fields, one note or a batch.
//!
//! Diagrams are wrapped in HTML comment markers so they can be found and
//! removed again without touching the rest of the field.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dictionary::AccentLookup;
use crate::renderer::render;
use crate::{clean, matcher};

pub const ACCENT_START: &str = "<!-- accent_start -->";
pub const ACCENT_END: &str = "<!-- accent_end -->";
pub const USER_ACCENT_START: &str = "<!-- user_accent_start -->";
pub const USER_ACCENT_END: &str = "<!-- user_accent_end -->";

const SEPARATOR: &str = "<br><hr><br>";

static ACCENT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!-- accent_start -->.+<!-- accent_end -->").unwrap());
static USER_ACCENT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- user_accent_start -->.+<!-- user_accent_end -->").unwrap()
});

/// The fields of one note the pipeline reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    pub id: i64,
    pub expression: String,
    pub reading: String,
    /// Field the diagram is appended to
    pub output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddReport {
    /// (note id, expression) for notes without accent data
    pub not_found: Vec<(i64, String)>,
    pub updated: usize,
    pub already_done: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveReport {
    pub already_done: usize,
    pub updated: usize,
}

/// True if the field already carries a generated or user diagram.
pub fn has_diagram(field: &str) -> bool {
    field.contains(ACCENT_START) || field.contains(USER_ACCENT_START)
}

/// Append `svg` wrapped in accent markers.
pub fn append_diagram(field: &str, svg: &str) -> String {
    let separator = if field.is_empty() { "" } else { SEPARATOR };
    format!("{field}{ACCENT_START}{separator}{svg}{ACCENT_END}")
}

/// Remove the marked diagram block (user markers when `user`). `None` if
/// the field has no such block.
pub fn remove_diagram(field: &str, user: bool) -> Option<String> {
    let (marker, block) = if user {
        (" user_accent_start", &USER_ACCENT_BLOCK)
    } else {
        (" accent_start", &ACCENT_BLOCK)
    };
    if !field.contains(marker) {
        return None;
    }
    Some(block.replace_all(field, "").into_owned())
}

/// Add diagrams to every note that has none yet. Notes without accent data
/// are reported, never fatal.
pub fn add_pitch<D: AccentLookup>(notes: &mut [NoteFields], dictionaries: &[D]) -> AddReport {
    let mut report = AddReport::default();

    for note in notes.iter_mut() {
        if has_diagram(&note.output) {
            report.already_done += 1;
            continue;
        }

        let expression = clean::clean(note.expression.trim());
        let reading = clean::clean(note.reading.trim());
        let Some(entry) = matcher::match_pattern(&expression, &reading, dictionaries) else {
            report.not_found.push((note.id, note.expression.trim().to_string()));
            continue;
        };

        let pattern = entry.pattern.without_lowercase_marks();
        let svg = render(&entry.reading, pattern.as_str(), false);
        note.output = append_diagram(&note.output, &svg);
        debug!(note = note.id, reading = %entry.reading, pattern = %pattern, "added pitch diagram");
        report.updated += 1;
    }

    report
}

/// Remove generated (or, with `user`, user-provided) diagrams.
pub fn remove_pitch(notes: &mut [NoteFields], user: bool) -> RemoveReport {
    let mut report = RemoveReport::default();

    for note in notes.iter_mut() {
        match remove_diagram(&note.output, user) {
            Some(output) => {
                note.output = output;
                report.updated += 1;
            }
            None => report.already_done += 1,
        }
    }

    report
}
