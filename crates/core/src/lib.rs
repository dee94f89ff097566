//! `stockledger-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod date;
pub mod error;
pub mod id;
pub mod lenient;

pub use date::{DATE_FORMAT, format_date, parse_date};
pub use error::{LedgerError, LedgerResult, ValidationError};
pub use id::{InvalidRecordId, RecordId};
pub use lenient::Lenient;
