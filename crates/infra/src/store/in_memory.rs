use stockledger_inventory::{MovementKind, MovementRow};

use super::r#trait::{RecordStore, StoreError};
use super::workbook::Workbook;

/// In-memory record store.
///
/// Intended for tests/dev. Keeps a working copy and a "saved" copy so tests
/// can tell what would have reached disk.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    working: Workbook,
    saved: Workbook,
    saves: usize,
}

impl InMemoryRecordStore {
    /// Empty store with no logs; they appear on first read.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store initialised like a freshly created ledger file.
    pub fn with_schema() -> Self {
        let book = Workbook::with_schema();
        Self {
            working: book.clone(),
            saved: book,
            saves: 0,
        }
    }

    pub fn saved(&self) -> &Workbook {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Rows of `kind` as last saved.
    pub fn saved_rows(&self, kind: MovementKind) -> Vec<MovementRow> {
        self.saved.rows(kind)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn read_log(&mut self, kind: MovementKind) -> Result<Vec<MovementRow>, StoreError> {
        self.working.ensure_log(kind);
        Ok(self.working.rows(kind))
    }

    fn write_log(&mut self, kind: MovementKind, rows: &[MovementRow]) -> Result<(), StoreError> {
        self.working.replace_rows(kind, rows);
        Ok(())
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.saved = self.working.clone();
        self.saves += 1;
        Ok(())
    }

    fn discard(&mut self) {
        self.working = self.saved.clone();
    }
}
