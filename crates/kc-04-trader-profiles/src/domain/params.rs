use kc_01_params::{validate_shared_budget, validate_unit_interval, ModuleParams};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{Coin, ValidationError};

/// Denom stakes are held in.
pub const STAKE_DENOM: &str = "ukale";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialParams {
    /// Share of each trade fee paid to the trader being copied.
    pub trader_fee_percentage: Decimal,
    /// Share of each trade fee paid to the treasury.
    pub treasury_fee_percentage: Decimal,
    pub minimum_stake_amount: Coin,
    pub enable_social_bonus: bool,
    /// Reputation bonus per follower.
    pub social_bonus_multiplier: Decimal,
}

impl Default for SocialParams {
    fn default() -> Self {
        Self {
            trader_fee_percentage: Decimal::new(10, 2),
            treasury_fee_percentage: Decimal::new(2, 2),
            minimum_stake_amount: Coin::new(STAKE_DENOM, 1_000_000),
            enable_social_bonus: true,
            social_bonus_multiplier: Decimal::new(1, 3),
        }
    }
}

impl ModuleParams for SocialParams {
    const MODULE: &'static str = "socialdex";

    fn validate(&self) -> Result<(), ValidationError> {
        validate_unit_interval("trader_fee_percentage", self.trader_fee_percentage)?;
        validate_unit_interval("treasury_fee_percentage", self.treasury_fee_percentage)?;
        validate_unit_interval("social_bonus_multiplier", self.social_bonus_multiplier)?;
        validate_shared_budget(&[
            ("trader_fee_percentage", self.trader_fee_percentage),
            ("treasury_fee_percentage", self.treasury_fee_percentage),
        ])?;

        if self.minimum_stake_amount.denom != STAKE_DENOM {
            return Err(ValidationError::new(
                "minimum_stake_amount",
                format!(
                    "denom must be {}, got {}",
                    STAKE_DENOM, self.minimum_stake_amount.denom
                ),
            ));
        }
        if self.minimum_stake_amount.is_zero() {
            return Err(ValidationError::new(
                "minimum_stake_amount",
                "minimum stake amount cannot be zero",
            ));
        }
        Ok(())
    }
}
