//! # Domain Errors
//!
//! Error types for the supply controller.

use crate::ports::outbound::BankError;
use kc_01_params::ParamsError;
use shared_types::{AddressError, Classify, ErrorKind, StoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupplyError {
    /// The fixed supply has already been minted.
    #[error("KALE supply already initialized")]
    AlreadyInitialized,

    #[error("minting is currently disabled")]
    MintingDisabled,

    #[error("invalid recipient: {0}")]
    InvalidRecipient(#[from] AddressError),

    #[error("invalid coin denomination; expected {expected}, got {got}")]
    InvalidDenom { expected: String, got: String },

    #[error("mint amount must be positive")]
    ZeroAmount,

    #[error("module account {name} does not exist")]
    ModuleAccountMissing { name: String },

    /// Supply after the mint would exceed `minting_cap`.
    #[error("minting cap exceeded: supply would be {requested}, cap is {cap}")]
    MintingCapExceeded { requested: u128, cap: u128 },

    #[error(transparent)]
    InvalidParams(#[from] ValidationError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("bank error: {0}")]
    Bank(#[from] BankError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Classify for SupplyError {
    fn kind(&self) -> ErrorKind {
        match self {
            SupplyError::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            SupplyError::MintingDisabled => ErrorKind::Disabled,
            SupplyError::InvalidRecipient(_)
            | SupplyError::InvalidDenom { .. }
            | SupplyError::ZeroAmount
            | SupplyError::MintingCapExceeded { .. }
            | SupplyError::InvalidParams(_) => ErrorKind::Validation,
            SupplyError::ModuleAccountMissing { .. } | SupplyError::Bank(_) => {
                ErrorKind::Capability
            }
            SupplyError::Params(e) => e.kind(),
            SupplyError::Store(e) => e.kind(),
        }
    }
}
