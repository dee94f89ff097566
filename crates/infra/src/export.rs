//! Report rendering into paginated plain-text documents.
//!
//! The domain hands over rows and totals; page layout lives here only.

use std::fs;
use std::path::Path;

use stockledger_core::format_date;
use stockledger_inventory::{ItemSummary, MovementKind, MovementRow, PeriodReport, StockLine};

use crate::config::MIN_PAGE_HEIGHT;

/// Title line, subtitle line, column header and footer take four lines.
const PAGE_CHROME: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Document {
    /// Pages joined by form feeds.
    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
            + "\n"
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.to_text())
    }
}

/// Turns report data into a [`Document`].
pub trait ReportRenderer {
    /// Current balances with low-stock flags.
    fn render_stock(&self, title: &str, lines: &[StockLine]) -> Document;

    /// Movements inside a window plus closing balances.
    fn render_period(&self, title: &str, report: &PeriodReport) -> Document;
}

/// Fixed-width text tables, `page_height` lines per page.
#[derive(Debug, Clone)]
pub struct TextReportRenderer {
    page_height: usize,
}

impl TextReportRenderer {
    pub fn new(page_height: usize) -> Self {
        Self {
            page_height: page_height.max(MIN_PAGE_HEIGHT),
        }
    }

    fn body_capacity(&self) -> usize {
        self.page_height - PAGE_CHROME
    }

    fn paginate(&self, title: &str, subtitle: &str, header: &str, body: Vec<String>) -> Document {
        let chunks: Vec<&[String]> = if body.is_empty() {
            vec![&body[..]]
        } else {
            body.chunks(self.body_capacity()).collect()
        };
        let total = chunks.len();

        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let mut lines = Vec::with_capacity(chunk.len() + PAGE_CHROME);
                lines.push(title.to_string());
                lines.push(subtitle.to_string());
                lines.push(header.to_string());
                lines.extend(chunk.iter().cloned());
                lines.push(format!("Página {}/{}", i + 1, total));
                Page { lines }
            })
            .collect();

        Document {
            title: title.to_string(),
            pages,
        }
    }
}

impl Default for TextReportRenderer {
    fn default() -> Self {
        Self::new(50)
    }
}

fn stock_header() -> String {
    format!("{:<12} {:<30} {:>10} {:>8}", "Código", "Produto", "Saldo", "Status")
}

fn summary_line(s: &ItemSummary) -> String {
    format!(
        "{:<12} {:<30} {:>10} {:>10} {:>10}",
        s.item_code, s.item_name, s.total_in, s.total_out, s.balance
    )
}

fn movement_line(kind: MovementKind, row: &MovementRow) -> String {
    format!(
        "{:<7} {:>5} {:<10} {:<12} {:<24} {:>8} {}",
        kind.label(),
        row.id.display_with(|id| id.to_string()),
        row.date_text(),
        row.item_code,
        row.item_name,
        row.quantity_text(),
        row.counterparty
    )
}

impl ReportRenderer for TextReportRenderer {
    fn render_stock(&self, title: &str, lines: &[StockLine]) -> Document {
        let body = lines
            .iter()
            .map(|l| {
                format!(
                    "{:<12} {:<30} {:>10} {:>8}",
                    l.summary.item_code,
                    l.summary.item_name,
                    l.summary.balance,
                    if l.status.is_low() { "BAIXO" } else { "" }
                )
            })
            .collect();
        self.paginate(title, "Saldo atual", &stock_header(), body)
    }

    fn render_period(&self, title: &str, report: &PeriodReport) -> Document {
        let subtitle = format!(
            "Período: {} a {}",
            format_date(report.range.start()),
            format_date(report.range.end())
        );
        let header = format!(
            "{:<7} {:>5} {:<10} {:<12} {:<24} {:>8} {}",
            "Tipo", "ID", "Data", "Código", "Produto", "Qtd", "Fornecedor/Destino"
        );

        let mut body = Vec::new();
        body.extend(report.entries.iter().map(|r| movement_line(MovementKind::Entry, r)));
        body.push(format!("Total de entradas: {}", report.total_entries));
        body.push(String::new());
        body.extend(report.exits.iter().map(|r| movement_line(MovementKind::Exit, r)));
        body.push(format!("Total de saídas: {}", report.total_exits));
        body.push(String::new());
        body.push(format!("Saldo em {}", format_date(report.range.end())));
        body.push(format!(
            "{:<12} {:<30} {:>10} {:>10} {:>10}",
            "Código", "Produto", "Entradas", "Saídas", "Saldo"
        ));
        body.extend(report.closing.iter().map(summary_line));

        self.paginate(title, &subtitle, &header, body)
    }
}
