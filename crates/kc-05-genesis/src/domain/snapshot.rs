//! # Genesis Snapshot
//!
//! JSON shape of the exported/imported state, one section per sub-domain.

use crate::domain::errors::GenesisError;
use kc_01_params::ModuleParams;
use kc_02_supply::BankParams;
use kc_03_trade_ledger::{TradeEvent, TradingParams};
use kc_04_trader_profiles::{SocialParams, TraderProfile};
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyGenesis {
    pub params: BankParams,
    /// Account that receives the fixed supply on import. Empty or absent
    /// means no initialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_supply_recipient: Option<String>,
    /// Informational on export; ignored on import.
    #[serde(default)]
    pub supply_initialized: bool,
}

impl SupplyGenesis {
    /// The designated recipient, parsed. `None` when absent or empty.
    pub fn recipient(&self) -> Result<Option<Address>, GenesisError> {
        match self.initial_supply_recipient.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(Address::parse(raw)?)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingGenesis {
    pub params: TradingParams,
    #[serde(default)]
    pub trade_events: Vec<TradeEvent>,
    #[serde(default)]
    pub trade_counter: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialGenesis {
    pub params: SocialParams,
    /// `None` means "rebuild from trade events".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<TraderProfile>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisSnapshot {
    pub supply: SupplyGenesis,
    pub trading: TradingGenesis,
    pub social: SocialGenesis,
}

/// Default params, no history, no supply recipient.
pub fn default_genesis() -> GenesisSnapshot {
    GenesisSnapshot::default()
}

impl GenesisSnapshot {
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GenesisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that need no store access.
    ///
    /// Trade ids must be canonical decimals, consecutive, and end at
    /// `trade_counter`. Where the sequence must start depends on the store
    /// and is checked on import.
    pub fn validate(&self) -> Result<(), GenesisError> {
        validate_params(&self.supply.params)?;
        validate_params(&self.trading.params)?;
        validate_params(&self.social.params)?;

        self.supply.recipient()?;

        let mut previous: Option<u64> = None;
        for event in &self.trading.trade_events {
            let invalid = |reason: String| GenesisError::InvalidTradeEvent {
                id: event.id.clone(),
                reason,
            };
            if event.id.is_empty() {
                return Err(invalid("id is empty".to_string()));
            }
            let id = event
                .numeric_id()
                .ok_or_else(|| invalid("id is not a decimal integer".to_string()))?;
            if let Some(prev) = previous {
                if Some(id) != prev.checked_add(1) {
                    return Err(invalid(format!("id does not follow {}", prev)));
                }
            }
            previous = Some(id);
        }
        if let Some(last) = previous {
            if self.trading.trade_counter != last {
                return Err(GenesisError::CounterMismatch {
                    expected: last,
                    got: self.trading.trade_counter,
                });
            }
        }

        if let Some(profiles) = &self.social.profiles {
            let mut seen = BTreeSet::new();
            for profile in profiles {
                profile.validate().map_err(GenesisError::InvalidProfile)?;
                if !seen.insert(&profile.address) {
                    return Err(GenesisError::DuplicateProfile {
                        address: profile.address.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn first_trade_id(&self) -> Option<u64> {
        self.trading.trade_events.first().and_then(|e| e.numeric_id())
    }
}

fn validate_params<P: ModuleParams>(params: &P) -> Result<(), GenesisError> {
    params
        .validate()
        .map_err(|source| GenesisError::InvalidParams {
            module: P::MODULE,
            source,
        })
}
