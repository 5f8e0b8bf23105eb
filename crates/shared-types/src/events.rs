//! # Domain Events
//!
//! Events returned by mutating operations. The host is responsible for
//! forwarding them (to its event log, an indexer, ...).

use crate::entities::{Address, Coin};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainEvent {
    ParamsUpdated {
        module: String,
    },
    TokensMinted {
        recipient: Address,
        amount: Coin,
    },
    SupplyInitialized {
        recipient: Address,
        amount: Coin,
    },
    TradeRecorded {
        trade_id: String,
        trader: Address,
        amount: u128,
        fee: u128,
    },
    ProfileCreated {
        trader: Address,
    },
    TraderFollowed {
        follower: Address,
        trader: Address,
    },
    TraderUnfollowed {
        follower: Address,
        trader: Address,
    },
    StakeUpdated {
        trader: Address,
        staked_amount: u128,
    },
    GenesisImported {
        trade_events: u64,
        profiles: u64,
    },
}

impl DomainEvent {
    /// Stable event type string, as emitted to the host's event log.
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::ParamsUpdated { .. } => "params_updated",
            DomainEvent::TokensMinted { .. } => "tokens_minted",
            DomainEvent::SupplyInitialized { .. } => "supply_initialized",
            DomainEvent::TradeRecorded { .. } => "trade_recorded",
            DomainEvent::ProfileCreated { .. } => "profile_created",
            DomainEvent::TraderFollowed { .. } => "trader_followed",
            DomainEvent::TraderUnfollowed { .. } => "trader_unfollowed",
            DomainEvent::StakeUpdated { .. } => "stake_updated",
            DomainEvent::GenesisImported { .. } => "genesis_imported",
        }
    }
}
