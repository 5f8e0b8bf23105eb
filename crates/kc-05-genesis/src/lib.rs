//! # Genesis Import/Export (kc-05)
//!
//! Moves the whole economic state in and out of a JSON `GenesisSnapshot`.
//!
//! ## Import order
//!
//! ```text
//! validate everything ──→ params ──→ profiles (if present)
//!                                        ↓
//!        supply (if recipient) ←── replay trade events
//! ```
//!
//! Validation covers every params record, every trade event, every profile
//! and the supply recipient before the first write, so a rejected snapshot
//! leaves the store untouched.
//!
//! Profiles, when supplied, are restored verbatim and trade replay does not
//! touch them. Without profiles, replay rebuilds them from the events.

pub mod config;
pub mod domain;
pub mod service;

pub use config::{GenesisConfig, SupplyImportPolicy};
pub use domain::errors::GenesisError;
pub use domain::snapshot::{
    default_genesis, GenesisSnapshot, SocialGenesis, SupplyGenesis, TradingGenesis,
};
pub use service::GenesisIO;
