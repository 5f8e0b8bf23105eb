//! # Domain Errors
//!
//! Error types for the trade ledger.

use kc_01_params::ParamsError;
use shared_types::{Classify, ErrorKind, StoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("trading is disabled")]
    TradingDisabled,

    /// Amount outside `[min_trade_amount, max_trade_amount]`.
    #[error("trade amount {amount} outside allowed range [{min}, {max}]")]
    OutOfBounds { amount: u128, min: u128, max: u128 },

    #[error("trade event not found: {id}")]
    NotFound { id: String },

    /// Replayed event id does not continue the counter.
    #[error("non-sequential trade id: expected {expected}, got {got}")]
    NonSequentialId { expected: u64, got: String },

    #[error("invalid page cursor: {cursor}")]
    InvalidCursor { cursor: String },

    #[error("fee computation overflowed for amount {amount}")]
    FeeOverflow { amount: u128 },

    #[error("trade counter exhausted")]
    CounterExhausted,

    #[error(transparent)]
    InvalidParams(#[from] ValidationError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A trade observer failed after the event was written. The enclosing
    /// call must be rolled back by the host.
    #[error("trade observer failed: {0}")]
    Observer(StoreError),
}

impl Classify for LedgerError {
    fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::TradingDisabled => ErrorKind::Disabled,
            LedgerError::OutOfBounds { .. }
            | LedgerError::NonSequentialId { .. }
            | LedgerError::InvalidCursor { .. }
            | LedgerError::FeeOverflow { .. }
            | LedgerError::CounterExhausted
            | LedgerError::InvalidParams(_) => ErrorKind::Validation,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::Params(e) => e.kind(),
            LedgerError::Store(e) | LedgerError::Observer(e) => e.kind(),
        }
    }
}
