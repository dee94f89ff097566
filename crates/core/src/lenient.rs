//! Lenient cell values.
//!
//! Ledger files are hand-edited. A cell that should hold a number or a date
//! may hold anything; the value is kept verbatim so it survives a rewrite, and
//! readers that need the typed value skip it.

use serde::{Deserialize, Serialize};

/// A typed value, or the raw text that failed to parse into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lenient<T> {
    Parsed(T),
    Raw(String),
}

impl<T> Lenient<T> {
    /// Try `parse` on `raw`; keep the text when it fails.
    pub fn parse_with(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        match parse(raw) {
            Some(value) => Self::Parsed(value),
            None => Self::Raw(raw.to_string()),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Parsed(v) => Some(v),
            Self::Raw(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl<T: Copy> Lenient<T> {
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

impl<T> Lenient<T> {
    /// Text form: `format` applied to the value, or the raw text as found.
    pub fn display_with(&self, format: impl FnOnce(&T) -> String) -> String {
        match self {
            Self::Parsed(v) => format(v),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self::Parsed(value)
    }
}
