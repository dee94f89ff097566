use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use stockledger_core::RecordId;
use stockledger_infra::config::Config;
use stockledger_infra::{Document, ReportRenderer, Session, TextReportRenderer};
use stockledger_inventory::{MovementInput, StockLine, Threshold, classify};

use crate::cli::{Cli, Commands, MovementArgs};

pub fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let threshold = match cli.min {
        Some(min) if min < 0 => bail!("--min must not be negative (got {min})"),
        Some(min) => Threshold(min),
        None => config.ledger.threshold(),
    };

    if let Commands::Create { path } = &cli.command {
        Session::create(path, threshold)
            .with_context(|| format!("creating ledger file {}", path.display()))?;
        println!("Ledger created: {}", path.display());
        return Ok(());
    }

    let path = ledger_path(&cli, config)?;
    let mut session =
        Session::open(&path, threshold).with_context(|| format!("opening {}", path.display()))?;
    execute(&mut session, cli.command, config)
}

fn execute(session: &mut Session, command: Commands, config: &Config) -> anyhow::Result<()> {
    let renderer = TextReportRenderer::new(config.report.page_height);

    match command {
        Commands::Create { path } => {
            bail!("{} cannot be created over an open ledger", path.display())
        }
        Commands::Entry(args) => {
            let record = session.engine().record_entry(&movement(args))?;
            println!(
                "Entrada {} registrada: {} {} x{}",
                record.id, record.item_code, record.item_name, record.quantity
            );
        }
        Commands::Exit(args) => {
            let record = session.engine().record_exit(&movement(args))?;
            println!(
                "Saida {} registrada: {} {} x{}",
                record.id, record.item_code, record.item_name, record.quantity
            );
        }
        Commands::Delete { log, ids } => {
            let ids = parse_ids(&ids)?;
            let removed = session.engine().delete_records(log.into(), &ids)?;
            println!("{removed} row(s) deleted");
        }
        Commands::Summary => {
            let threshold = session.min_stock();
            let summary = session.engine().summary()?;
            println!(
                "{:<12} {:<30} {:>10} {:>10} {:>10} {}",
                "Código", "Produto", "Entradas", "Saídas", "Saldo", "Status"
            );
            for item in summary.iter() {
                println!(
                    "{:<12} {:<30} {:>10} {:>10} {:>10} {}",
                    item.item_code,
                    item.item_name,
                    item.total_in,
                    item.total_out,
                    item.balance,
                    classify(item, threshold)
                );
            }
        }
        Commands::History => {
            for line in session.engine().history()? {
                println!(
                    "{:<7} {:>5} {:<10} {:<12} {:<24} {:>8} {} {}",
                    line.kind.label(),
                    line.id,
                    line.date,
                    line.item_code,
                    line.item_name,
                    line.quantity,
                    line.counterparty,
                    line.remark
                );
            }
        }
        Commands::Report { from, to, out } => {
            let report = session.engine().period_report(&from, &to)?;
            let doc = renderer.render_period(&config.report.title, &report);
            emit(&doc, out.as_deref())?;
        }
        Commands::StockReport { out } => {
            let lines = session.stock_report()?;
            let doc = renderer.render_stock(&config.report.title, &lines);
            emit(&doc, out.as_deref())?;
        }
        Commands::SetMin { value } => {
            session.set_min_stock(value)?;
            print_flags(&session.stock_report()?, session.min_stock());
        }
    }

    Ok(())
}

fn ledger_path(cli: &Cli, config: &Config) -> anyhow::Result<PathBuf> {
    match cli.file.clone().or_else(|| config.ledger.path.clone()) {
        Some(path) => Ok(path),
        None => bail!("no ledger file: pass --file or set ledger.path in the configuration"),
    }
}

fn movement(args: MovementArgs) -> MovementInput {
    MovementInput::new(args.code, args.name, args.qty, args.party, args.remark)
}

fn parse_ids(raw: &[String]) -> anyhow::Result<HashSet<RecordId>> {
    raw.iter()
        .map(|s| s.parse::<RecordId>().map_err(anyhow::Error::from))
        .collect()
}

fn emit(doc: &Document, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            doc.write_to(path)
                .with_context(|| format!("writing report to {}", path.display()))?;
            tracing::info!(path = %path.display(), pages = doc.pages.len(), "report written");
        }
        None => print!("{}", doc.to_text()),
    }
    Ok(())
}

fn print_flags(lines: &[StockLine], threshold: Threshold) {
    println!("Estoque mínimo: {}", threshold.get());
    for line in lines {
        println!(
            "{:<12} {:<30} {:>10} {}",
            line.summary.item_code, line.summary.item_name, line.summary.balance, line.status
        );
    }
}
