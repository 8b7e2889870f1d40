//! pitchlib — Japanese pitch-accent diagrams and accent dictionary matching.
//!
//! Words are split into morae, their High/Low accent pattern is classified
//! (heiban, atamadaka, nakadaka, …) and drawn as a compact SVG. Accent
//! patterns for vocabulary come from one or more accent dictionaries.
//!
//! # Example
//! ```no_run
//! use pitchlib::{pitch_svg_for, AccentDictionary};
//!
//! let dict = AccentDictionary::load("wadoku_pitchdb.csv").unwrap();
//! let svg = pitch_svg_for("<b>橋</b>", "はし", &[dict]);
//! println!("{}", svg.unwrap_or_default());
//! ```

pub mod annotate;
pub mod classify;
pub mod clean;
pub mod dictionary;
pub mod error;
pub mod kana;
pub mod matcher;
pub mod model;
pub mod mora;
pub mod renderer;

pub use classify::classify;
pub use dictionary::{AccentDictionary, AccentLookup};
pub use error::{Error, Result};
pub use matcher::match_pattern;
pub use model::*;
pub use mora::segment;
pub use renderer::{render, render_with, RenderOptions};

/// Clean raw field contents, find the best dictionary entry and render it.
/// `None` if no dictionary has data for the expression.
pub fn pitch_svg_for<D: AccentLookup>(
    expression: &str,
    reading: &str,
    dictionaries: &[D],
) -> Option<String> {
    let expression = clean::clean(expression);
    let reading = clean::clean(reading);
    let entry = match_pattern(&expression, &reading, dictionaries)?;
    let pattern = entry.pattern.without_lowercase_marks();
    Some(render(&entry.reading, pattern.as_str(), false))
}

/// Convert an entry to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn entry_to_json(entry: &AccentEntry) -> Result<String> {
    Ok(serde_json::to_string(entry)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for embedding in host applications
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a pitch diagram and return the SVG as a C string.
/// The caller must free the returned string with `pitchlib_free_string`.
///
/// Length mismatches between word and pattern are tolerated silently.
///
/// # Safety
/// `word` and `pattern` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn pitchlib_render_svg(
    word: *const c_char,
    pattern: *const c_char,
) -> *mut c_char {
    if word.is_null() || pattern.is_null() {
        return std::ptr::null_mut();
    }
    let (Ok(word), Ok(pattern)) = (
        unsafe { CStr::from_ptr(word) }.to_str(),
        unsafe { CStr::from_ptr(pattern) }.to_str(),
    ) else {
        return std::ptr::null_mut();
    };

    CString::new(render(word, pattern, true))
        .unwrap_or_default()
        .into_raw()
}

/// Free a string previously returned by pitchlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a pitchlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn pitchlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
