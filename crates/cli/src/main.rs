mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;

use stockledger_infra::config::Config;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;

    stockledger_observability::init(config.log.format);

    commands::run(cli, &config)
}
