//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a movement row, unique within its log.
///
/// Always in `1..=i64::MAX`, so every id fits an integer cell. New ids are
/// derived from the rows currently present (see [`RecordId::next_after`]),
/// not from a persisted counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
    /// The id handed to the first row of an empty log.
    pub const FIRST: RecordId = RecordId(1);

    /// The largest id a log can hold.
    pub const MAX: RecordId = RecordId(i64::MAX as u64);

    /// Wrap a raw id. Zero and values past [`RecordId::MAX`] are rejected.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0 && raw <= Self::MAX.0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Next id for a log holding `existing`: `max + 1`, or 1 when empty.
    ///
    /// Recomputed from the current rows, so deleting the highest id makes it
    /// available again. `None` once the highest id is [`RecordId::MAX`].
    pub fn next_after(existing: impl IntoIterator<Item = RecordId>) -> Option<Self> {
        match existing.into_iter().max() {
            Some(max) => max.0.checked_add(1).and_then(Self::new),
            None => Some(Self::FIRST),
        }
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An id was zero, negative, too large or not a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid record id: {0:?}")]
pub struct InvalidRecordId(pub String);

impl TryFrom<u64> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| InvalidRecordId(raw.to_string()))
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str(s.trim())
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidRecordId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[u64]) -> Vec<RecordId> {
        raw.iter().map(|r| RecordId::new(*r).unwrap()).collect()
    }

    #[test]
    fn empty_log_starts_at_one() {
        assert_eq!(RecordId::next_after(Vec::new()), Some(RecordId::FIRST));
    }

    #[test]
    fn next_is_max_plus_one() {
        assert_eq!(RecordId::next_after(ids(&[1, 2, 3])).map(RecordId::get), Some(4));
        assert_eq!(RecordId::next_after(ids(&[7, 2])).map(RecordId::get), Some(8));
    }

    #[test]
    fn deleted_max_is_reused() {
        assert_eq!(RecordId::next_after(ids(&[1, 2])).map(RecordId::get), Some(3));
    }

    #[test]
    fn ids_stay_within_i64() {
        assert_eq!(RecordId::MAX.get(), i64::MAX as u64);
        assert!(RecordId::new(i64::MAX as u64 + 1).is_none());
        assert!(RecordId::new(u64::MAX).is_none());
        assert!("9223372036854775808".parse::<RecordId>().is_err());
    }

    #[test]
    fn no_next_id_after_the_max() {
        assert_eq!(RecordId::next_after([RecordId::MAX]), None);
        assert_eq!(
            RecordId::next_after(ids(&[i64::MAX as u64 - 1])),
            Some(RecordId::MAX)
        );
    }

    #[test]
    fn zero_is_rejected() {
        assert!(RecordId::new(0).is_none());
        assert!("0".parse::<RecordId>().is_err());
        assert!("abc".parse::<RecordId>().is_err());
        assert_eq!(" 12 ".parse::<RecordId>().unwrap().get(), 12);
    }

    proptest! {
        #[test]
        fn next_is_strictly_greater_than_every_existing_id(
            raw in prop::collection::vec(1u64..10_000, 0..50)
        ) {
            let existing = ids(&raw);
            let next = RecordId::next_after(existing.iter().copied());
            prop_assert!(next.is_some());
            prop_assert!(existing.iter().all(|id| Some(*id) < next));
        }
    }
}
