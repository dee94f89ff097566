use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use stockledger_inventory::Threshold;
use stockledger_observability::LogFormat;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Ledger file and stock rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Ledger file used when none is given on the command line.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Low-stock threshold (inclusive).
    #[serde(default = "default_min_stock")]
    pub min_stock: i64,
}

impl LedgerConfig {
    pub fn threshold(&self) -> Threshold {
        Threshold(self.min_stock)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: None,
            min_stock: default_min_stock(),
        }
    }
}

/// Rendered report layout
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Lines per page, header and footer included.
    #[serde(default = "default_page_height")]
    pub page_height: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            page_height: default_page_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_min_stock() -> i64 {
    Threshold::DEFAULT.get()
}

fn default_title() -> String {
    "Relatório de Estoque".to_string()
}

fn default_page_height() -> usize {
    50
}
