use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use stockledger_inventory::MovementKind;

#[derive(Parser, Debug)]
#[command(name = "stockledger")]
#[command(about = "Stock entry/exit ledger with balances and period reports", long_about = None)]
pub struct Cli {
    /// Ledger file (overrides `ledger.path` from the configuration)
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    /// Low-stock threshold (overrides `ledger.min_stock`)
    #[arg(long, global = true)]
    pub min: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new, empty ledger file
    Create {
        path: PathBuf,
    },
    /// Record stock received
    Entry(MovementArgs),
    /// Record stock issued
    Exit(MovementArgs),
    /// Delete rows by id from one log
    Delete {
        #[arg(long, value_enum)]
        log: LogArg,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Per-item totals and balances
    Summary,
    /// Every recorded movement, entries first
    History,
    /// Movements within a date window plus balances at its end
    Report {
        /// First day, DD/MM/YYYY
        #[arg(long)]
        from: String,
        /// Last day, DD/MM/YYYY
        #[arg(long)]
        to: String,
        /// Write the rendered document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Current balances flagged against the threshold
    StockReport {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Set the low-stock threshold and show the resulting flags
    SetMin {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

#[derive(Args, Debug)]
pub struct MovementArgs {
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub name: String,
    /// Kept as text; the ledger validates it
    #[arg(long, allow_hyphen_values = true)]
    pub qty: String,
    /// Supplier (entries) or destination (exits)
    #[arg(long, default_value = "")]
    pub party: String,
    #[arg(long, default_value = "")]
    pub remark: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogArg {
    Entries,
    Exits,
}

impl From<LogArg> for MovementKind {
    fn from(value: LogArg) -> Self {
        match value {
            LogArg::Entries => MovementKind::Entry,
            LogArg::Exits => MovementKind::Exit,
        }
    }
}
