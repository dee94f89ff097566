//! Record store boundary.
//!
//! Movement logs are persisted as two sheets of a tabular workbook. Every
//! mutation is a full read-modify-write: read the whole log, change it, write
//! the whole log back, then save the workbook. There is no append-only path
//! and no locking; one running instance owns a file at a time.

pub mod file;
pub mod in_memory;
pub mod row;
pub mod r#trait;
pub mod workbook;

pub use file::WorkbookFileStore;
pub use in_memory::InMemoryRecordStore;
pub use row::{Cell, Row};
pub use r#trait::{RecordStore, StoreError};
pub use workbook::{Workbook, header};
