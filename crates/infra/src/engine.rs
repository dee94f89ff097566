//! Ledger engine: the load → decide → persist pipeline for stock movements.
//!
//! ```text
//! input
//!   ↓
//! 1. Validate input fields (no IO yet)
//!   ↓
//! 2. Load both logs from the store (full read)
//!   ↓
//! 3. Decide the new record on the pure `Ledger` (stock check for exits)
//!   ↓
//! 4. Write the whole affected log back and save
//! ```
//!
//! Any failure in steps 1–3 leaves the store untouched. A failure in step 4
//! discards the store's pending changes, so a refused record is never picked
//! up by a later save. The check in step 3
//! and the write in step 4 are not atomic against another process writing the
//! same file; a store is assumed to be owned by one running instance.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use stockledger_core::{LedgerError, RecordId};
use stockledger_inventory::{
    DateRange, HistoryLine, Ledger, MovementInput, MovementKind, MovementRecord, PeriodReport,
    StockLine, Summary, Threshold, history, period_report, stock_report, summarize_as_of,
};

use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum EngineError {
    /// Input or business-rule failure; nothing was written.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The backing store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Available quantity when an exit was refused for insufficient stock.
    pub fn insufficient_stock(&self) -> Option<i64> {
        match self {
            EngineError::Ledger(e) => e.available(),
            EngineError::Store(_) => None,
        }
    }
}

/// Source of "today" for new records.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock stuck on one day (tests, back-dated imports).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Records movements against a [`RecordStore`] and answers queries over it.
///
/// Every operation starts from a fresh full read of the store; no summary is
/// kept between calls.
#[derive(Debug)]
pub struct LedgerEngine<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S> LedgerEngine<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S, C> LedgerEngine<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S, C> LedgerEngine<S, C>
where
    S: RecordStore,
    C: Clock,
{
    /// Load both logs.
    pub fn ledger(&mut self) -> Result<Ledger, EngineError> {
        let entries = self.store.read_log(MovementKind::Entry)?;
        let exits = self.store.read_log(MovementKind::Exit)?;
        Ok(Ledger::new(entries, exits))
    }

    /// Record stock received from `input.counterparty` (the supplier).
    pub fn record_entry(&mut self, input: &MovementInput) -> Result<MovementRecord, EngineError> {
        self.record(MovementKind::Entry, input)
    }

    /// Record stock issued to `input.counterparty` (the destination).
    ///
    /// Refused with `InsufficientStock` when the quantity exceeds the item's
    /// current balance.
    pub fn record_exit(&mut self, input: &MovementInput) -> Result<MovementRecord, EngineError> {
        self.record(MovementKind::Exit, input)
    }

    fn record(
        &mut self,
        kind: MovementKind,
        input: &MovementInput,
    ) -> Result<MovementRecord, EngineError> {
        // Reject bad input before the store is even read.
        input.validate()?;

        let mut ledger = self.ledger()?;
        let record = ledger.prepare(kind, input, self.clock.today())?;
        ledger.append(record.clone());
        self.persist(kind, &ledger)?;

        tracing::info!(
            log = kind.log_name(),
            id = %record.id,
            item_code = %record.item_code,
            quantity = record.quantity,
            "movement recorded"
        );
        Ok(record)
    }

    /// Delete rows of one log by id. Unknown ids are ignored.
    pub fn delete_records(
        &mut self,
        kind: MovementKind,
        ids: &HashSet<RecordId>,
    ) -> Result<usize, EngineError> {
        let mut ledger = self.ledger()?;
        let removed = ledger.delete(kind, ids);
        self.persist(kind, &ledger)?;

        tracing::info!(log = kind.log_name(), requested = ids.len(), removed, "records deleted");
        Ok(removed)
    }

    fn persist(&mut self, kind: MovementKind, ledger: &Ledger) -> Result<(), EngineError> {
        let saved = self
            .store
            .write_log(kind, ledger.log(kind))
            .and_then(|()| self.store.save());
        if let Err(err) = saved {
            self.store.discard();
            tracing::warn!(log = kind.log_name(), error = %err, "save failed, changes discarded");
            return Err(err.into());
        }
        Ok(())
    }

    pub fn summary(&mut self) -> Result<Summary, EngineError> {
        Ok(self.ledger()?.summary())
    }

    pub fn summary_as_of(&mut self, cutoff: NaiveDate) -> Result<Summary, EngineError> {
        let ledger = self.ledger()?;
        Ok(summarize_as_of(&ledger.entries, &ledger.exits, cutoff))
    }

    pub fn balance_of(&mut self, item_code: &str) -> Result<i64, EngineError> {
        Ok(self.ledger()?.balance_of(item_code))
    }

    pub fn history(&mut self) -> Result<Vec<HistoryLine>, EngineError> {
        Ok(history(&self.ledger()?))
    }

    pub fn stock_report(&mut self, threshold: Threshold) -> Result<Vec<StockLine>, EngineError> {
        Ok(stock_report(&self.ledger()?, threshold))
    }

    /// Period report for `DD/MM/YYYY` bounds; the bounds are checked first.
    pub fn period_report(&mut self, start: &str, end: &str) -> Result<PeriodReport, EngineError> {
        let range = DateRange::parse(start, end)?;
        Ok(period_report(&self.ledger()?, range))
    }
}
