//! Period and stock reports.
//!
//! A period report pairs what moved inside a date window with where stock
//! stood at the window's end. The closing balances cover all history up to
//! the end date, not only the window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockledger_core::{LedgerError, LedgerResult, format_date, parse_date};

use crate::classifier::{StockStatus, Threshold, classify};
use crate::ledger::Ledger;
use crate::record::MovementRow;
use crate::summary::{ItemSummary, Summary, add_or_keep, summarize_as_of};

/// Inclusive `[start, end]` window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> LedgerResult<Self> {
        if start > end {
            return Err(LedgerError::invalid_range(format!(
                "start {} is after end {}",
                format_date(start),
                format_date(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds as `DD/MM/YYYY`.
    pub fn parse(start: &str, end: &str) -> LedgerResult<Self> {
        let start_date = parse_date(start)
            .ok_or_else(|| LedgerError::invalid_range(format!("unparsable start date {start:?}")))?;
        let end_date = parse_date(end)
            .ok_or_else(|| LedgerError::invalid_range(format!("unparsable end date {end:?}")))?;
        Self::new(start_date, end_date)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Rows dated inside `range`, in their original order.
///
/// Rows without a parsable date are left out.
pub fn filter_by_date_range(rows: &[MovementRow], range: &DateRange) -> Vec<MovementRow> {
    rows.iter()
        .filter(|row| row.date().is_some_and(|d| range.contains(d)))
        .cloned()
        .collect()
}

/// Sum of parsable quantities. A row that would overflow the sum is skipped.
pub fn total_quantity(rows: &[MovementRow]) -> i64 {
    rows.iter()
        .filter_map(MovementRow::quantity)
        .fold(0, add_or_keep)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReport {
    pub range: DateRange,
    pub entries: Vec<MovementRow>,
    pub exits: Vec<MovementRow>,
    pub total_entries: i64,
    pub total_exits: i64,
    /// Balances as of `range.end()`, over all history up to that day.
    pub closing: Summary,
}

/// Build a report for `start..=end` given as `DD/MM/YYYY` strings.
///
/// Bounds are validated before any row is looked at.
pub fn build_period_report(ledger: &Ledger, start: &str, end: &str) -> LedgerResult<PeriodReport> {
    let range = DateRange::parse(start, end)?;
    Ok(period_report(ledger, range))
}

pub fn period_report(ledger: &Ledger, range: DateRange) -> PeriodReport {
    let entries = filter_by_date_range(&ledger.entries, &range);
    let exits = filter_by_date_range(&ledger.exits, &range);
    PeriodReport {
        range,
        total_entries: total_quantity(&entries),
        total_exits: total_quantity(&exits),
        entries,
        exits,
        closing: summarize_as_of(&ledger.entries, &ledger.exits, range.end()),
    }
}

/// One line of the current-stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub summary: ItemSummary,
    pub status: StockStatus,
}

/// Every item's current balance with its low-stock flag, in first-seen order.
pub fn stock_report(ledger: &Ledger, threshold: Threshold) -> Vec<StockLine> {
    ledger
        .summary()
        .into_vec()
        .into_iter()
        .map(|summary| StockLine {
            status: classify(&summary, threshold),
            summary,
        })
        .collect()
}
