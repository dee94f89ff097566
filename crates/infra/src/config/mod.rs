//! Configuration management.
//!
//! Settings are layered:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! The file is `stockledger.toml` in the working directory unless
//! `STOCKLEDGER_CONFIG` names another one. Environment overrides follow
//! `STOCKLEDGER__<section>__<key>`, e.g. `STOCKLEDGER__LEDGER__MIN_STOCK=5`.

mod models;
mod sources;

pub use models::{Config, LedgerConfig, LogConfig, ReportConfig};

use thiserror::Error;

/// Smallest page that still fits title, subtitle, column header, footer and
/// one body line.
pub const MIN_PAGE_HEIGHT: usize = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from all sources (file + environment).
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.min_stock < 0 {
            return Err(ConfigError::Invalid(format!(
                "ledger.min_stock must not be negative (got {})",
                self.ledger.min_stock
            )));
        }
        if self.report.page_height < MIN_PAGE_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "report.page_height must be at least {MIN_PAGE_HEIGHT} (got {})",
                self.report.page_height
            )));
        }
        Ok(())
    }
}
