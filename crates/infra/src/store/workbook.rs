use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockledger_inventory::{MovementKind, MovementRow};

use super::row::{COLUMNS, Cell, Row};

/// Header row of a log. Only the date and counterparty titles differ.
pub fn header(kind: MovementKind) -> [&'static str; COLUMNS] {
    match kind {
        MovementKind::Entry => [
            "ID",
            "Código",
            "Produto",
            "Quantidade",
            "Data Entrada",
            "Fornecedor",
            "Observação",
        ],
        MovementKind::Exit => [
            "ID",
            "Código",
            "Produto",
            "Quantidade",
            "Data Saida",
            "Destino/Obra",
            "Observação",
        ],
    }
}

fn header_row(kind: MovementKind) -> Row {
    Row(header(kind).iter().map(|h| Cell::text(*h)).collect())
}

/// In-memory image of a workbook: named sheets of rows, header first.
///
/// Serialized as `{"sheets": {"Entradas": [[...], ...], "Saidas": [...]}}`.
/// Sheets other than the two logs are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: BTreeMap<String, Vec<Row>>,
}

impl Workbook {
    /// Both logs, header only.
    pub fn with_schema() -> Self {
        let mut book = Self::default();
        for kind in MovementKind::ALL {
            book.ensure_log(kind);
        }
        book
    }

    /// Add a missing log with its header. Returns whether it was created.
    pub fn ensure_log(&mut self, kind: MovementKind) -> bool {
        let sheet = self.sheets.entry(kind.log_name().to_string()).or_default();
        if sheet.is_empty() {
            sheet.push(header_row(kind));
            return true;
        }
        false
    }

    /// Decoded rows of one log, header and blank rows excluded.
    pub fn rows(&self, kind: MovementKind) -> Vec<MovementRow> {
        self.sheets
            .get(kind.log_name())
            .map(|sheet| {
                sheet
                    .iter()
                    .skip(1)
                    .filter(|row| !row.is_blank())
                    .map(Row::decode)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Overwrite one log, keeping its existing header row when present.
    pub fn replace_rows(&mut self, kind: MovementKind, rows: &[MovementRow]) {
        let sheet = self.sheets.entry(kind.log_name().to_string()).or_default();
        let head = sheet.first().cloned().unwrap_or_else(|| header_row(kind));
        sheet.clear();
        sheet.push(head);
        sheet.extend(rows.iter().map(Row::encode));
    }
}
