//! Error type for dictionary loading and serialization.
//!
//! Rendering, classification, segmentation and matching never fail; only
//! operations over structured inputs (dictionary files, JSON) return errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read dictionary '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dictionary line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
