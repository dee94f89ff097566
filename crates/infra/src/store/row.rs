//! Cell-level codec between workbook rows and [`MovementRow`]s.
//!
//! Column order is fixed: id, code, name, quantity, date, counterparty,
//! remark. Short rows are padded with empty cells; extra cells are ignored.

use serde::{Deserialize, Serialize};

use stockledger_core::{Lenient, RecordId, parse_date};
use stockledger_inventory::MovementRow;

pub const COLUMNS: usize = 7;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Cell content as it would be displayed.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Int(n) => n.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }

    /// Integer content; whole floats within `i64` and numeric text count.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(n) => Some(*n),
            Cell::Float(f) if f.fract() == 0.0 && fits_i64(*f) => Some(*f as i64),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Float(_) | Cell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Int(_) | Cell::Float(_) => false,
        }
    }
}

fn fits_i64(f: f64) -> bool {
    (i64::MIN as f64..i64::MAX as f64).contains(&f)
}

/// One workbook row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Vec<Cell>);

impl Row {
    pub fn cell(&self, index: usize) -> &Cell {
        self.0.get(index).unwrap_or(&Cell::Empty)
    }

    /// True when every cell is blank (spreadsheet filler rows).
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Cell::is_empty)
    }

    pub fn decode(&self) -> MovementRow {
        MovementRow {
            id: lenient(self.cell(0), |c| {
                c.as_int()
                    .and_then(|n| u64::try_from(n).ok())
                    .and_then(RecordId::new)
            }),
            item_code: self.cell(1).as_text(),
            item_name: self.cell(2).as_text(),
            quantity: lenient(self.cell(3), Cell::as_int),
            date: lenient(self.cell(4), |c| match c {
                Cell::Text(s) => parse_date(s),
                _ => None,
            }),
            counterparty: self.cell(5).as_text(),
            remark: self.cell(6).as_text(),
        }
    }

    pub fn encode(row: &MovementRow) -> Self {
        Row(vec![
            match &row.id {
                Lenient::Parsed(id) => i64::try_from(id.get())
                    .map(Cell::Int)
                    .unwrap_or_else(|_| Cell::text(id.to_string())),
                Lenient::Raw(raw) => raw_cell(raw),
            },
            Cell::text(&row.item_code),
            Cell::text(&row.item_name),
            match &row.quantity {
                Lenient::Parsed(q) => Cell::Int(*q),
                Lenient::Raw(raw) => raw_cell(raw),
            },
            Cell::text(row.date_text()),
            Cell::text(&row.counterparty),
            Cell::text(&row.remark),
        ])
    }
}

fn lenient<T>(cell: &Cell, parse: impl FnOnce(&Cell) -> Option<T>) -> Lenient<T> {
    match parse(cell) {
        Some(v) => Lenient::Parsed(v),
        None => Lenient::Raw(cell.as_text()),
    }
}

fn raw_cell(raw: &str) -> Cell {
    if raw.is_empty() { Cell::Empty } else { Cell::text(raw) }
}
