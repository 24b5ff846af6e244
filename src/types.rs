use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::path::PathBuf;

/// One input row: field name to raw field text, in header order
pub type RawRecord = IndexMap<String, String>;

/// A `RawRecord` with every value replaced by its inferred type
pub type TypedRecord = IndexMap<String, TypedValue>;

/// The native type inferred for a single field
///
/// Serializes untagged, so each variant renders as the bare JSON value
/// (`"text"`, `42`, `3.14`, `true`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Integer(Integer),
    Float(f64),
    Boolean(bool),
    Null,
}

/// A base-10 integer of any width, kept as its normalized digit text
///
/// Leading zeros are stripped and `-0` becomes `0`, so `"-007"` holds `-7`.
/// The digits are written to JSON verbatim, never through a float.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    /// Parse `-?[0-9]+`; anything else (including a leading `+`) is `None`
    pub fn parse(s: &str) -> Option<Self> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Some(Integer("0".to_string()));
        }
        let mut text = String::with_capacity(trimmed.len() + 1);
        if negative {
            text.push('-');
        }
        text.push_str(trimmed);
        Some(Integer(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as `i64`, if it fits
    pub fn to_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Integer(n.to_string())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.clone()).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

/// Configuration for a conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Spaces before each record (0 = compact, single line)
    pub indent: usize,

    /// Field delimiter of the tabular input
    pub delimiter: u8,
}

impl ConvertConfig {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            indent: 4,
            delimiter: b',',
        }
    }
}

/// Outcome of a file-to-file conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of records written to the output document
    pub records: usize,
}
