//! # Outbound Ports (Driven Ports)
//!
//! Capabilities the supply controller needs from the host chain.

use shared_types::{Address, Coin};
use thiserror::Error;

/// Account/bank capability provided by the host.
///
/// Methods take `&self`; implementations handle their own synchronization.
/// Bank state is part of the host's transaction: when a call into the core
/// fails, the host rolls back bank effects together with store writes.
pub trait BankKeeper: Send + Sync {
    /// Mint `coin` into the named module account.
    fn mint_to(&self, module: &str, coin: &Coin) -> Result<(), BankError>;

    /// Move `coin` from a module account to a user account.
    fn transfer_module_to_account(
        &self,
        module: &str,
        to: &Address,
        coin: &Coin,
    ) -> Result<(), BankError>;

    fn balance_of(&self, address: &Address, denom: &str) -> Result<Coin, BankError>;

    fn supply_of(&self, denom: &str) -> Result<Coin, BankError>;

    fn module_account_exists(&self, name: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("module account {name} not found")]
    ModuleAccountNotFound { name: String },

    #[error("insufficient funds in {account}: need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: u128,
        available: u128,
    },

    #[error("amount overflow")]
    Overflow,

    #[error("bank unavailable: {reason}")]
    Unavailable { reason: String },
}
