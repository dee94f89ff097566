//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// A single input field failed validation.
///
/// Raised before any mutation; the caller corrects the field and retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A quantity did not parse as an integer, or was not strictly positive.
    #[error("invalid quantity: {raw:?}")]
    InvalidQuantity { raw: String },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_quantity(raw: impl Into<String>) -> Self {
        Self::InvalidQuantity { raw: raw.into() }
    }
}

/// Domain-level error.
///
/// Deterministic business failures only. Storage failures are reported by the
/// infrastructure layer, never folded into this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A movement input field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An exit asked for more than the item currently holds.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { available: i64, requested: i64 },

    /// A log already holds the largest possible id.
    #[error("no record id left after {last}")]
    IdsExhausted { last: u64 },

    /// Report bounds were malformed or inverted.
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
}

impl LedgerError {
    pub fn missing(field: &'static str) -> Self {
        Self::Validation(ValidationError::missing(field))
    }

    pub fn invalid_quantity(raw: impl Into<String>) -> Self {
        Self::Validation(ValidationError::invalid_quantity(raw))
    }

    pub fn insufficient_stock(available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }

    pub fn ids_exhausted(last: u64) -> Self {
        Self::IdsExhausted { last }
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidDateRange(msg.into())
    }

    /// Available quantity carried by an `InsufficientStock` failure.
    pub fn available(&self) -> Option<i64> {
        match self {
            Self::InsufficientStock { available, .. } => Some(*available),
            _ => None,
        }
    }
}
