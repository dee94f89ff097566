//! Combined movement history: every entry, then every exit, in log order.

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::record::{MovementKind, MovementRow};

/// One line of the history listing.
///
/// Id, date and quantity are shown as found in the file, so hand-edited
/// values that do not parse still appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLine {
    pub kind: MovementKind,
    pub id: String,
    pub date: String,
    pub item_code: String,
    pub item_name: String,
    pub quantity: String,
    pub counterparty: String,
    pub remark: String,
}

impl HistoryLine {
    fn from_row(kind: MovementKind, row: &MovementRow) -> Self {
        Self {
            kind,
            id: row.id.display_with(|id| id.to_string()),
            date: row.date_text(),
            item_code: row.item_code.clone(),
            item_name: row.item_name.clone(),
            quantity: row.quantity_text(),
            counterparty: row.counterparty.clone(),
            remark: row.remark.clone(),
        }
    }
}

pub fn history(ledger: &Ledger) -> Vec<HistoryLine> {
    MovementKind::ALL
        .into_iter()
        .flat_map(|kind| {
            ledger
                .log(kind)
                .iter()
                .map(move |row| HistoryLine::from_row(kind, row))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_core::{Lenient, RecordId, parse_date};

    fn row(id: u64, qty: &str) -> MovementRow {
        MovementRow {
            id: Lenient::Parsed(RecordId::new(id).unwrap()),
            item_code: "A1".to_string(),
            item_name: "Widget".to_string(),
            quantity: Lenient::parse_with(qty, |s| s.parse().ok()),
            date: Lenient::parse_with("02/01/2024", parse_date),
            counterparty: "Acme".to_string(),
            remark: String::new(),
        }
    }

    #[test]
    fn lists_entries_then_exits_tagged_by_kind() {
        let ledger = Ledger::new(vec![row(1, "5"), row(2, "7")], vec![row(1, "3")]);
        let lines = history(&ledger);
        let tags: Vec<_> = lines.iter().map(|l| (l.kind.label(), l.id.as_str())).collect();
        assert_eq!(tags, [("Entrada", "1"), ("Entrada", "2"), ("Saida", "1")]);
        assert_eq!(lines[0].date, "02/01/2024");
    }

    #[test]
    fn unparsable_quantity_is_listed_verbatim() {
        let ledger = Ledger::new(vec![row(1, "a dozen")], vec![]);
        assert_eq!(history(&ledger)[0].quantity, "a dozen");
    }
}
