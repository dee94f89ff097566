use std::fs;
use std::path::{Path, PathBuf};

use stockledger_inventory::{MovementKind, MovementRow};

use super::r#trait::{RecordStore, StoreError};
use super::workbook::Workbook;

/// Workbook persisted as a JSON document on disk.
///
/// The path is bound at `open`/`create` time. The whole file is read once at
/// open and rewritten on every `save`, through a sibling temp file and a
/// rename so a failed write leaves the previous file intact. The image last
/// written is kept so `discard` can drop unsaved changes.
#[derive(Debug)]
pub struct WorkbookFileStore {
    path: PathBuf,
    book: Workbook,
    saved: Workbook,
    dirty: bool,
}

impl WorkbookFileStore {
    /// Open an existing ledger file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }

        let text = fs::read_to_string(&path)?;
        let book: Workbook =
            serde_json::from_str(&text).map_err(|e| StoreError::format(&path, e.to_string()))?;

        tracing::info!(path = %path.display(), sheets = book.sheets.len(), "ledger file opened");
        Ok(Self {
            path,
            saved: book.clone(),
            book,
            dirty: false,
        })
    }

    /// Create (or truncate) a ledger file holding both empty logs.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            book: Workbook::with_schema(),
            saved: Workbook::default(),
            dirty: true,
        };
        store.save()?;
        tracing::info!(path = %store.path.display(), "ledger file created");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workbook(&self) -> &Workbook {
        &self.book
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for WorkbookFileStore {
    fn read_log(&mut self, kind: MovementKind) -> Result<Vec<MovementRow>, StoreError> {
        if self.book.ensure_log(kind) {
            tracing::debug!(log = kind.log_name(), "missing log created with header");
            self.dirty = true;
        }
        let rows = self.book.rows(kind);
        let partial = rows
            .iter()
            .filter(|r| r.quantity().is_none() || r.date().is_none())
            .count();
        if partial > 0 {
            tracing::debug!(log = kind.log_name(), rows = partial, "rows with unparsable cells");
        }
        Ok(rows)
    }

    fn write_log(&mut self, kind: MovementKind, rows: &[MovementRow]) -> Result<(), StoreError> {
        self.book.replace_rows(kind, rows);
        self.dirty = true;
        Ok(())
    }

    fn save(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(&self.book)
            .map_err(|e| StoreError::format(&self.path, e.to_string()))?;
        let tmp = self.temp_path();
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        self.saved = self.book.clone();
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), "ledger file saved");
        Ok(())
    }

    fn discard(&mut self) {
        self.book = self.saved.clone();
        self.dirty = false;
    }
}
