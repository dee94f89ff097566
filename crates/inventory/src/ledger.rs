use std::collections::HashSet;

use chrono::NaiveDate;

use stockledger_core::{LedgerError, LedgerResult, RecordId};

use crate::record::{MovementInput, MovementKind, MovementRecord, MovementRow};
use crate::summary::{Summary, summarize};

/// The pair of movement logs, in file order.
///
/// Pure state: decisions (`prepare`) never mutate, and mutations (`append`,
/// `delete`) never validate. Persisting is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub entries: Vec<MovementRow>,
    pub exits: Vec<MovementRow>,
}

impl Ledger {
    pub fn new(entries: Vec<MovementRow>, exits: Vec<MovementRow>) -> Self {
        Self { entries, exits }
    }

    pub fn log(&self, kind: MovementKind) -> &[MovementRow] {
        match kind {
            MovementKind::Entry => &self.entries,
            MovementKind::Exit => &self.exits,
        }
    }

    fn log_mut(&mut self, kind: MovementKind) -> &mut Vec<MovementRow> {
        match kind {
            MovementKind::Entry => &mut self.entries,
            MovementKind::Exit => &mut self.exits,
        }
    }

    /// Id the next row appended to `kind` will get.
    ///
    /// Fails with `IdsExhausted` once the log holds [`RecordId::MAX`].
    pub fn next_id(&self, kind: MovementKind) -> LedgerResult<RecordId> {
        RecordId::next_after(self.log(kind).iter().filter_map(MovementRow::id))
            .ok_or_else(|| LedgerError::ids_exhausted(RecordId::MAX.get()))
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.entries, &self.exits)
    }

    /// Current balance of `item_code` across the whole ledger.
    pub fn balance_of(&self, item_code: &str) -> i64 {
        self.summary().balance_of(item_code)
    }

    /// Decide the record a movement would produce, without appending it.
    ///
    /// Exits are checked against the current balance of their item.
    pub fn prepare(
        &self,
        kind: MovementKind,
        input: &MovementInput,
        date: NaiveDate,
    ) -> LedgerResult<MovementRecord> {
        let movement = input.validate()?;

        if kind == MovementKind::Exit {
            let available = self.balance_of(&movement.item_code);
            if movement.quantity > available {
                return Err(LedgerError::insufficient_stock(available, movement.quantity));
            }
        }

        let id = self.next_id(kind)?;
        Ok(movement.into_record(kind, id, date))
    }

    pub fn append(&mut self, record: MovementRecord) {
        let kind = record.kind;
        self.log_mut(kind).push(record.into());
    }

    /// Remove every row of `kind` whose id is in `ids`. Returns how many went.
    ///
    /// Unknown ids are ignored; remaining rows keep their ids.
    pub fn delete(&mut self, kind: MovementKind, ids: &HashSet<RecordId>) -> usize {
        let log = self.log_mut(kind);
        let before = log.len();
        log.retain(|row| !row.id().is_some_and(|id| ids.contains(&id)));
        before - log.len()
    }

    pub fn row_count(&self) -> usize {
        self.entries.len() + self.exits.len()
    }
}
