//! Session context: the ledger file bound for this run and the current
//! low-stock threshold.

use std::path::Path;

use stockledger_core::ValidationError;
use stockledger_inventory::{StockLine, Threshold};

use crate::engine::{EngineError, LedgerEngine};
use crate::store::{StoreError, WorkbookFileStore};

/// Owns the bound ledger file and the threshold used for classification.
#[derive(Debug)]
pub struct Session {
    engine: LedgerEngine<WorkbookFileStore>,
    min_stock: Threshold,
}

impl Session {
    /// Create a new, empty ledger file at `path` and bind it.
    pub fn create(path: impl AsRef<Path>, min_stock: Threshold) -> Result<Self, StoreError> {
        let store = WorkbookFileStore::create(path)?;
        Ok(Self::bind(store, min_stock))
    }

    /// Bind an existing ledger file.
    pub fn open(path: impl AsRef<Path>, min_stock: Threshold) -> Result<Self, StoreError> {
        let store = WorkbookFileStore::open(path)?;
        Ok(Self::bind(store, min_stock))
    }

    fn bind(store: WorkbookFileStore, min_stock: Threshold) -> Self {
        Self {
            engine: LedgerEngine::new(store),
            min_stock,
        }
    }

    pub fn path(&self) -> &Path {
        self.engine.store().path()
    }

    pub fn min_stock(&self) -> Threshold {
        self.min_stock
    }

    /// Change the threshold used by every later classification.
    pub fn set_min_stock(&mut self, min_stock: i64) -> Result<(), ValidationError> {
        if min_stock < 0 {
            return Err(ValidationError::invalid_quantity(min_stock.to_string()));
        }
        self.min_stock = Threshold(min_stock);
        tracing::debug!(min_stock, "low-stock threshold changed");
        Ok(())
    }

    pub fn engine(&mut self) -> &mut LedgerEngine<WorkbookFileStore> {
        &mut self.engine
    }

    /// Current balances classified against the session threshold.
    pub fn stock_report(&mut self) -> Result<Vec<StockLine>, EngineError> {
        let threshold = self.min_stock;
        self.engine.stock_report(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_inventory::{MovementInput, StockStatus};
    use tempfile::TempDir;

    #[test]
    fn threshold_change_applies_to_next_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        let mut session = Session::create(path, Threshold::default()).unwrap();
        session
            .engine()
            .record_entry(&MovementInput::new("A1", "Widget", "20", "Acme", ""))
            .unwrap();

        assert_eq!(session.stock_report().unwrap()[0].status, StockStatus::Ok);

        session.set_min_stock(20).unwrap();
        assert_eq!(session.min_stock(), Threshold(20));
        assert_eq!(session.stock_report().unwrap()[0].status, StockStatus::Low);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        let mut session = Session::create(path, Threshold::default()).unwrap();
        assert!(session.set_min_stock(-1).is_err());
        assert_eq!(session.min_stock(), Threshold::default());
    }

    #[test]
    fn reopened_session_sees_saved_movements() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        {
            let mut session = Session::create(&path, Threshold::default()).unwrap();
            session
                .engine()
                .record_entry(&MovementInput::new("A1", "Widget", "7", "Acme", ""))
                .unwrap();
        }

        let mut session = Session::open(&path, Threshold::default()).unwrap();
        assert_eq!(session.path(), path.as_path());
        assert_eq!(session.engine().balance_of("A1").unwrap(), 7);
    }
}
