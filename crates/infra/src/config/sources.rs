use std::env;
use std::path::PathBuf;

use config::{ConfigError, Environment, File, FileFormat};

use super::models::Config;

const CONFIG_ENV_VAR: &str = "STOCKLEDGER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "stockledger.toml";
const ENV_PREFIX: &str = "STOCKLEDGER";
const ENV_SEPARATOR: &str = "__";

/// Load configuration with priority (lowest to highest):
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if it exists)
/// 3. Environment variables
pub fn load() -> Result<Config, ConfigError> {
    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_sources(config_path)
}

/// Load configuration from a specific path and the environment.
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::debug!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(
            File::from(config_path)
                .format(FileFormat::Toml)
                .required(false),
        );
    }

    // STOCKLEDGER__LEDGER__MIN_STOCK -> ledger.min_stock
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    builder.build()?.try_deserialize()
}
