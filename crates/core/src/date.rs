//! Calendar dates as stored in the ledger: `DD/MM/YYYY`, no time of day.
//!
//! The pattern is fixed and locale-independent. Every persisted date and every
//! date typed by a user goes through [`parse_date`] / [`format_date`].

use chrono::NaiveDate;

/// `chrono` pattern for the ledger date format.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` date. Surrounding whitespace is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Format a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
