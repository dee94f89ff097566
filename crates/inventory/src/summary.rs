//! Aggregator: folds movement rows into per-item summaries.
//!
//! Summaries are rebuilt from the logs on every call; nothing here is cached.
//! Rows without a usable code or quantity are skipped, never reported, and so
//! is a row whose quantity would overflow its item's running total.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::MovementRow;

/// Totals for one item code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub item_code: String,
    pub item_name: String,
    pub total_in: i64,
    pub total_out: i64,
    /// `total_in - total_out`.
    pub balance: i64,
}

/// Per-item summaries keyed by item code, in first-seen order.
///
/// Codes seen in entries come first (in entry-log order), then codes that only
/// appear in exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    items: Vec<ItemSummary>,
    index: HashMap<String, usize>,
}

impl Summary {
    pub fn get(&self, item_code: &str) -> Option<&ItemSummary> {
        self.index.get(item_code.trim()).map(|&i| &self.items[i])
    }

    /// Balance for `item_code`; zero for an unknown code.
    pub fn balance_of(&self, item_code: &str) -> i64 {
        self.get(item_code).map(|s| s.balance).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSummary> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<ItemSummary> {
        self.items
    }

    fn slot(&mut self, code: &str, name: &str) -> &mut ItemSummary {
        let existing = self.index.get(code).copied();
        let i = match existing {
            Some(i) => i,
            None => {
                self.items.push(ItemSummary {
                    item_code: code.to_string(),
                    item_name: name.to_string(),
                    total_in: 0,
                    total_out: 0,
                    balance: 0,
                });
                self.index.insert(code.to_string(), self.items.len() - 1);
                self.items.len() - 1
            }
        };
        &mut self.items[i]
    }
}

/// Summarize the whole ledger.
pub fn summarize(entries: &[MovementRow], exits: &[MovementRow]) -> Summary {
    fold(entries, exits, |_| true)
}

/// Summarize only rows dated on or before `cutoff`.
///
/// Rows whose date cannot be parsed are skipped.
pub fn summarize_as_of(
    entries: &[MovementRow],
    exits: &[MovementRow],
    cutoff: NaiveDate,
) -> Summary {
    fold(entries, exits, |row| row.date().is_some_and(|d| d <= cutoff))
}

// Name resolution: the first name seen for a code in entries wins; a code with
// no entries takes the first name seen in exits. Entries are folded first, so
// slot creation order gives exactly that.
fn fold(
    entries: &[MovementRow],
    exits: &[MovementRow],
    keep: impl Fn(&MovementRow) -> bool,
) -> Summary {
    let mut summary = Summary::default();

    for row in entries.iter().filter(|r| keep(r)) {
        let (Some(code), Some(qty)) = (row.code(), row.quantity()) else {
            continue;
        };
        let item = summary.slot(code, &row.item_name);
        item.total_in = add_or_keep(item.total_in, qty);
    }

    for row in exits.iter().filter(|r| keep(r)) {
        let (Some(code), Some(qty)) = (row.code(), row.quantity()) else {
            continue;
        };
        let item = summary.slot(code, &row.item_name);
        item.total_out = add_or_keep(item.total_out, qty);
    }

    for item in &mut summary.items {
        item.balance = item.total_in.saturating_sub(item.total_out);
    }

    summary
}

/// `total + qty`, or `total` unchanged when that would overflow.
pub(crate) fn add_or_keep(total: i64, qty: i64) -> i64 {
    total.checked_add(qty).unwrap_or(total)
}
