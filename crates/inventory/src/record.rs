use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockledger_core::{LedgerError, LedgerResult, Lenient, RecordId, format_date};

/// Largest quantity a single movement may carry.
///
/// Keeps per-item totals far from `i64` overflow for any realistic log.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Which log a movement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Stock received (the "Entradas" log).
    Entry,
    /// Stock issued (the "Saidas" log).
    Exit,
}

impl MovementKind {
    pub const ALL: [MovementKind; 2] = [MovementKind::Entry, MovementKind::Exit];

    /// Name of the backing log.
    pub fn log_name(self) -> &'static str {
        match self {
            MovementKind::Entry => "Entradas",
            MovementKind::Exit => "Saidas",
        }
    }

    /// Singular label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            MovementKind::Entry => "Entrada",
            MovementKind::Exit => "Saida",
        }
    }
}

/// Raw movement input as typed by a user.
///
/// Quantity stays text until [`MovementInput::validate`] so that a malformed
/// value is reported as such rather than rejected by a caller's parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInput {
    pub item_code: String,
    pub item_name: String,
    pub quantity: String,
    /// Supplier for entries, destination for exits.
    pub counterparty: String,
    pub remark: String,
}

impl MovementInput {
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        quantity: impl Into<String>,
        counterparty: impl Into<String>,
        remark: impl Into<String>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            quantity: quantity.into(),
            counterparty: counterparty.into(),
            remark: remark.into(),
        }
    }

    /// Check required fields, then the quantity (`1..=MAX_QUANTITY`).
    pub fn validate(&self) -> LedgerResult<ValidMovement> {
        let item_code = self.item_code.trim();
        if item_code.is_empty() {
            return Err(LedgerError::missing("item_code"));
        }
        let item_name = self.item_name.trim();
        if item_name.is_empty() {
            return Err(LedgerError::missing("item_name"));
        }

        let quantity = match self.quantity.trim().parse::<i64>() {
            Ok(q) if (1..=MAX_QUANTITY).contains(&q) => q,
            _ => return Err(LedgerError::invalid_quantity(self.quantity.clone())),
        };

        Ok(ValidMovement {
            item_code: item_code.to_string(),
            item_name: item_name.to_string(),
            quantity,
            counterparty: self.counterparty.trim().to_string(),
            remark: self.remark.trim().to_string(),
        })
    }
}

/// Movement input that passed validation; not yet assigned an id or date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMovement {
    pub item_code: String,
    pub item_name: String,
    pub quantity: i64,
    pub counterparty: String,
    pub remark: String,
}

impl ValidMovement {
    pub fn into_record(self, kind: MovementKind, id: RecordId, date: NaiveDate) -> MovementRecord {
        MovementRecord {
            kind,
            id,
            item_code: self.item_code,
            item_name: self.item_name,
            quantity: self.quantity,
            date,
            counterparty: self.counterparty,
            remark: self.remark,
        }
    }
}

/// One recorded entry or exit (immutable once persisted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub kind: MovementKind,
    pub id: RecordId,
    pub item_code: String,
    pub item_name: String,
    /// Strictly positive.
    pub quantity: i64,
    pub date: NaiveDate,
    pub counterparty: String,
    pub remark: String,
}

/// A row of a movement log as read back from storage.
///
/// Code, name and free-text columns are taken as-is; id, quantity and date may
/// fail to parse in a hand-edited file and are then kept raw. Readers skip rows
/// whose typed value they need is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRow {
    pub id: Lenient<RecordId>,
    pub item_code: String,
    pub item_name: String,
    pub quantity: Lenient<i64>,
    pub date: Lenient<NaiveDate>,
    pub counterparty: String,
    pub remark: String,
}

impl MovementRow {
    pub fn id(&self) -> Option<RecordId> {
        self.id.get()
    }

    pub fn quantity(&self) -> Option<i64> {
        self.quantity.get()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date.get()
    }

    /// Item code with surrounding whitespace removed; `None` when blank.
    pub fn code(&self) -> Option<&str> {
        let code = self.item_code.trim();
        (!code.is_empty()).then_some(code)
    }

    pub fn date_text(&self) -> String {
        self.date.display_with(|d| format_date(*d))
    }

    pub fn quantity_text(&self) -> String {
        self.quantity.display_with(|q| q.to_string())
    }
}

impl From<MovementRecord> for MovementRow {
    fn from(record: MovementRecord) -> Self {
        Self {
            id: record.id.into(),
            item_code: record.item_code,
            item_name: record.item_name,
            quantity: record.quantity.into(),
            date: record.date.into(),
            counterparty: record.counterparty,
            remark: record.remark,
        }
    }
}
