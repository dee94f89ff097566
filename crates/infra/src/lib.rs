//! Infrastructure layer: ledger file storage, the ledger engine, session
//! context, configuration and report rendering.

pub mod config;
pub mod engine;
pub mod export;
pub mod session;
pub mod store;

pub use engine::{Clock, EngineError, FixedClock, LedgerEngine, SystemClock};
pub use export::{Document, Page, ReportRenderer, TextReportRenderer};
pub use session::Session;
