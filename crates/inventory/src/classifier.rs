//! Low-stock classification.

use serde::{Deserialize, Serialize};

use crate::summary::ItemSummary;

/// Minimum-stock threshold. Items at or below it are flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(pub i64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(10);

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Low,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ok => "ok",
            StockStatus::Low => "low",
        }
    }

    pub fn is_low(self) -> bool {
        self == StockStatus::Low
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Low` iff `balance <= threshold`.
pub fn classify(summary: &ItemSummary, threshold: Threshold) -> StockStatus {
    classify_balance(summary.balance, threshold)
}

pub fn classify_balance(balance: i64, threshold: Threshold) -> StockStatus {
    if balance <= threshold.0 {
        StockStatus::Low
    } else {
        StockStatus::Ok
    }
}
