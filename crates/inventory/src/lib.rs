//! Inventory ledger domain module.
//!
//! This crate contains the business rules for recording stock movements and
//! deriving balances and reports, implemented purely as deterministic domain
//! logic (no IO, no logging, no storage).

pub mod classifier;
pub mod history;
pub mod ledger;
pub mod record;
pub mod report;
pub mod summary;

pub use classifier::{StockStatus, Threshold, classify, classify_balance};
pub use history::{HistoryLine, history};
pub use ledger::Ledger;
pub use record::{
    MAX_QUANTITY, MovementInput, MovementKind, MovementRecord, MovementRow, ValidMovement,
};
pub use report::{
    DateRange, PeriodReport, StockLine, build_period_report, filter_by_date_range, period_report,
    stock_report, total_quantity,
};
pub use summary::{ItemSummary, Summary, summarize, summarize_as_of};
