use kc_01_params::ParamsError;
use kc_02_supply::SupplyError;
use kc_03_trade_ledger::LedgerError;
use kc_04_trader_profiles::ProfileError;
use shared_types::{AddressError, Classify, ErrorKind, KeyLayoutError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    #[error("invalid {module} params in genesis: {source}")]
    InvalidParams {
        module: &'static str,
        source: ValidationError,
    },

    #[error("invalid trade event {id:?} in genesis: {reason}")]
    InvalidTradeEvent { id: String, reason: String },

    #[error("trade counter mismatch: expected {expected}, genesis has {got}")]
    CounterMismatch { expected: u64, got: u64 },

    #[error("invalid trader profile in genesis: {0}")]
    InvalidProfile(ValidationError),

    #[error("duplicate trader profile in genesis: {address}")]
    DuplicateProfile { address: String },

    #[error("invalid initial supply recipient: {0}")]
    InvalidRecipient(#[from] AddressError),

    #[error("genesis designates a supply recipient but supply is already initialized")]
    SupplyAlreadyInitialized,

    #[error("invalid key layout: {0}")]
    KeyLayout(#[from] KeyLayoutError),

    #[error("genesis JSON error: {message}")]
    Json { message: String },

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Supply(#[from] SupplyError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl From<serde_json::Error> for GenesisError {
    fn from(err: serde_json::Error) -> Self {
        GenesisError::Json {
            message: err.to_string(),
        }
    }
}

impl Classify for GenesisError {
    fn kind(&self) -> ErrorKind {
        match self {
            GenesisError::InvalidParams { .. }
            | GenesisError::InvalidTradeEvent { .. }
            | GenesisError::CounterMismatch { .. }
            | GenesisError::InvalidProfile(_)
            | GenesisError::DuplicateProfile { .. }
            | GenesisError::InvalidRecipient(_)
            | GenesisError::KeyLayout(_)
            | GenesisError::Json { .. } => ErrorKind::Validation,
            GenesisError::SupplyAlreadyInitialized => ErrorKind::AlreadyInitialized,
            GenesisError::Params(e) => e.kind(),
            GenesisError::Supply(e) => e.kind(),
            GenesisError::Ledger(e) => e.kind(),
            GenesisError::Profile(e) => e.kind(),
        }
    }
}
