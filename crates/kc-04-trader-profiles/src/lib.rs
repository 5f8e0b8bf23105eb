//! # Trader Profiles (kc-04)
//!
//! Reputation bookkeeping for traders on the social exchange.
//!
//! A profile is created the first time a trader has a trade committed (or
//! stakes), then only ever mutated additively. Profiles are never deleted.
//!
//! ## Domain Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Consistent counts | `profitable_trades <= total_trades` |
//! | Derived rate | `success_rate == profitable_trades / total_trades` (0 when no trades) |
//! | No self-follow | A trader never appears in their own follower set |
//! | Stake floor | A non-zero stake is at least `minimum_stake_amount` |
//!
//! ## Crate Structure
//!
//! - `domain/` - Profile entity, social params, fee split and reputation math
//! - `service.rs` - `TraderProfileStore`, also the ledger's `TradeObserver`

pub mod domain;
pub mod service;

pub use domain::entities::{FeeSplit, TraderProfile};
pub use domain::errors::ProfileError;
pub use domain::keys::ProfileKeys;
pub use domain::params::{SocialParams, STAKE_DENOM};
pub use domain::social::{reputation_score, split_fee};
pub use service::{ProfileConfig, TraderProfileStore};
