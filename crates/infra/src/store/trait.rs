use std::path::PathBuf;

use thiserror::Error;

use stockledger_inventory::{MovementKind, MovementRow};

/// Record store operation error.
///
/// These are **infrastructure errors** (file access, file shape) as opposed to
/// domain errors (validation, stock rules). They are surfaced as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ledger file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("ledger file {} is malformed: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("ledger file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Tabular store holding the entry and exit logs.
///
/// Rows come back in file order with the header excluded, already decoded
/// into [`MovementRow`]s. Cells that do not parse are kept raw, never dropped,
/// so a rewrite preserves hand edits.
///
/// Implementations must:
/// - create a missing log (with its header) on first read
/// - treat `write_log` as a full overwrite of that log
/// - only touch the backing medium on `save`
/// - return to the last saved state on `discard`
pub trait RecordStore {
    /// Read every row of one log.
    fn read_log(&mut self, kind: MovementKind) -> Result<Vec<MovementRow>, StoreError>;

    /// Replace the contents of one log.
    fn write_log(&mut self, kind: MovementKind, rows: &[MovementRow]) -> Result<(), StoreError>;

    /// Persist pending changes.
    fn save(&mut self) -> Result<(), StoreError>;

    /// Drop every change made since the last successful `save`.
    fn discard(&mut self);
}

impl<S> RecordStore for Box<S>
where
    S: RecordStore + ?Sized,
{
    fn read_log(&mut self, kind: MovementKind) -> Result<Vec<MovementRow>, StoreError> {
        (**self).read_log(kind)
    }

    fn write_log(&mut self, kind: MovementKind, rows: &[MovementRow]) -> Result<(), StoreError> {
        (**self).write_log(kind, rows)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        (**self).save()
    }

    fn discard(&mut self) {
        (**self).discard()
    }
}
