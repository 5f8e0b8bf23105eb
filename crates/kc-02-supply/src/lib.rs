//! # KALE Supply Controller (kc-02)
//!
//! Issues the fixed KALE supply (100M KALE = 10^14 ukale) exactly once and
//! answers balance and supply queries through the host's bank capability.
//!
//! ## State Machine
//!
//! ```text
//! Uninitialized ──initialize(recipient)──→ Initialized (terminal)
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Mint-once | A second `initialize` fails with `AlreadyInitialized` and mints nothing |
//! | Native denom | Only `ukale` can be minted |
//! | Cap | Supply after any mint stays within `minting_cap` (whole KALE) |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Params, token constants, errors
//! - `ports/` - `BankKeeper` outbound port
//! - `adapters/` - `InMemoryBank` for tests and the reference host
//! - `service.rs` - `SupplyController`

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory_bank::InMemoryBank;
pub use domain::errors::SupplyError;
pub use domain::params::BankParams;
pub use domain::token::{
    token_metadata, total_supply_coin, DenomUnit, TokenMetadata, DISPLAY_DENOM,
    DISPLAY_EXPONENT, KALE_DENOM, MODULE_NAME, TOTAL_SUPPLY,
};
pub use ports::outbound::{BankError, BankKeeper};
pub use service::{SupplyConfig, SupplyController, SupplyKeys};
