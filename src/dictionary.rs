//! Accent dictionary — maps orthographic forms to known (reading, pattern)
//! candidates.
//!
//! Two text formats are supported:
//!   - the bundled format: one record per line, five fields separated by
//!     U+241E (`orths␞reading␞freq␞variant␞patterns`), where `orths` is a
//!     U+241F-separated list of surface forms and `patterns` a
//!     comma-separated list of which only the first is used
//!   - the user format: tab-separated `orth\treading\tpattern`
//!
//! Dictionaries are built once and read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::kana::{hiragana_to_katakana, is_mostly_katakana};
use crate::model::AccentEntry;

const FIELD_SEPARATOR: char = '\u{241E}';
const ORTH_SEPARATOR: char = '\u{241F}';
const PRIMARY_FIELDS: usize = 5;
const USER_FIELDS: usize = 3;

/// Anything that can answer "which entries are known for this key".
pub trait AccentLookup {
    /// Candidates for `key`, or `None` if the key is unknown.
    fn lookup(&self, key: &str) -> Option<&[AccentEntry]>;
}

impl<T: AccentLookup + ?Sized> AccentLookup for &T {
    fn lookup(&self, key: &str) -> Option<&[AccentEntry]> {
        (**self).lookup(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccentDictionary {
    entries: HashMap<String, Vec<AccentEntry>>,
}

impl AccentDictionary {
    /// Load a dictionary in the bundled format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dict = Self::parse(&read_file(path)?)?;
        info!(path = %path.display(), keys = dict.len(), entries = dict.entry_count(), "loaded accent dictionary");
        Ok(dict)
    }

    /// Load a dictionary in the tab-separated user format.
    pub fn load_user<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dict = Self::parse_user(&read_file(path)?)?;
        info!(path = %path.display(), keys = dict.len(), entries = dict.entry_count(), "loaded user accent dictionary");
        Ok(dict)
    }

    /// Parse bundled-format text. Identical (reading, pattern) pairs under
    /// the same key are stored once.
    pub fn parse(text: &str) -> Result<Self> {
        let mut dict = Self::default();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() != PRIMARY_FIELDS {
                return Err(Error::MalformedLine {
                    line: idx + 1,
                    expected: PRIMARY_FIELDS,
                    found: fields.len(),
                });
            }
            // fields[2] (frequency class) and fields[3] (variant descriptor) are unused
            let (orths, reading, patterns) = (fields[0], fields[1], fields[4]);

            let mut keys: Vec<String> = orths.split(ORTH_SEPARATOR).map(str::to_string).collect();
            let cleaned = clean_orth(&keys[0]);
            if cleaned != keys[0] {
                keys.insert(0, cleaned);
            }

            let common = patterns.split(',').next().unwrap_or_default();
            let reading = if is_mostly_katakana(&keys[0]) {
                hiragana_to_katakana(reading)
            } else {
                reading.to_string()
            };
            let entry = AccentEntry::new(reading, common);

            for key in keys {
                let candidates = dict.entries.entry(key).or_default();
                if !candidates.contains(&entry) {
                    candidates.push(entry.clone());
                }
            }
        }

        Ok(dict)
    }

    /// Parse user-format text. Every line adds a candidate, duplicates
    /// included.
    pub fn parse_user(text: &str) -> Result<Self> {
        let mut dict = Self::default();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != USER_FIELDS {
                return Err(Error::MalformedLine {
                    line: idx + 1,
                    expected: USER_FIELDS,
                    found: fields.len(),
                });
            }

            dict.entries
                .entry(fields[0].to_string())
                .or_default()
                .push(AccentEntry::new(fields[1], fields[2]));
        }

        Ok(dict)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total candidates across all keys.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn get(&self, key: &str) -> Option<&[AccentEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl AccentLookup for AccentDictionary {
    fn lookup(&self, key: &str) -> Option<&[AccentEntry]> {
        self.get(key).filter(|candidates| !candidates.is_empty())
    }
}

/// Strip dictionary notation from a headword: parentheses, braces, angle
/// brackets, △ × ･ markers, and `…` rewritten as `〜`.
pub fn clean_orth(orth: &str) -> String {
    orth.chars()
        .filter(|c| !matches!(c, '(' | ')' | '△' | '×' | '･' | '〈' | '〉' | '{' | '}'))
        .map(|c| if c == '…' { '〜' } else { c })
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
