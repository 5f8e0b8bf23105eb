//! # Profile Entities

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ValidationError};
use std::collections::BTreeSet;

/// Fractional digits kept in `success_rate`.
pub const SUCCESS_RATE_PRECISION: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderProfile {
    pub address: Address,
    pub followers: BTreeSet<Address>,
    pub total_trades: u64,
    pub profitable_trades: u64,
    pub total_profit: i128,
    pub success_rate: Decimal,
    pub staked_amount: u128,
}

impl TraderProfile {
    /// The zero profile returned for traders without a record.
    pub fn empty(address: Address) -> Self {
        Self {
            address,
            followers: BTreeSet::new(),
            total_trades: 0,
            profitable_trades: 0,
            total_profit: 0,
            success_rate: Decimal::ZERO,
            staked_amount: 0,
        }
    }

    /// Fold one trade outcome into the profile.
    pub fn apply_trade(&mut self, trader_profit: i128) {
        self.total_trades = self.total_trades.saturating_add(1);
        if trader_profit > 0 {
            self.profitable_trades = self.profitable_trades.saturating_add(1);
        }
        self.total_profit = self.total_profit.saturating_add(trader_profit);
        self.success_rate = compute_success_rate(self.profitable_trades, self.total_trades);
    }

    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    /// Structural checks used when importing profiles from genesis.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profitable_trades > self.total_trades {
            return Err(ValidationError::new(
                "profitable_trades",
                format!(
                    "{} exceeds total_trades {} for {}",
                    self.profitable_trades, self.total_trades, self.address
                ),
            ));
        }
        if self.followers.contains(&self.address) {
            return Err(ValidationError::new(
                "followers",
                format!("{} follows itself", self.address),
            ));
        }
        if self.success_rate != compute_success_rate(self.profitable_trades, self.total_trades) {
            return Err(ValidationError::new(
                "success_rate",
                format!("{} does not match trade counts for {}", self.success_rate, self.address),
            ));
        }
        Ok(())
    }
}

/// `profitable / total`, rounded to [`SUCCESS_RATE_PRECISION`] digits.
pub fn compute_success_rate(profitable: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(profitable)
        .checked_div(Decimal::from(total))
        .map(|rate| rate.round_dp(SUCCESS_RATE_PRECISION).normalize())
        .unwrap_or(Decimal::ZERO)
}

/// How a trade fee is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    pub trader: u128,
    pub treasury: u128,
    /// Remainder kept by the protocol.
    pub protocol: u128,
}
