//! Fee splitting and reputation scoring.

use super::entities::{FeeSplit, TraderProfile};
use super::errors::ProfileError;
use super::params::SocialParams;
use kc_01_params::apply_rate;
use rust_decimal::Decimal;

/// Divide `fee` between the copied trader, the treasury and the protocol.
///
/// Trader and treasury shares are floored; the protocol keeps the remainder,
/// so the three parts always sum to `fee`.
pub fn split_fee(fee: u128, params: &SocialParams) -> Result<FeeSplit, ProfileError> {
    let overflow = || ProfileError::Overflow {
        operation: "split_fee",
    };
    let trader = apply_rate(fee, params.trader_fee_percentage).ok_or_else(overflow)?;
    let treasury = apply_rate(fee, params.treasury_fee_percentage).ok_or_else(overflow)?;
    let protocol = fee
        .checked_sub(trader)
        .and_then(|rest| rest.checked_sub(treasury))
        .ok_or_else(overflow)?;

    Ok(FeeSplit {
        trader,
        treasury,
        protocol,
    })
}

/// `success_rate * (1 + followers * social_bonus_multiplier)` when the social
/// bonus is enabled, plain `success_rate` otherwise.
pub fn reputation_score(profile: &TraderProfile, params: &SocialParams) -> Result<Decimal, ProfileError> {
    if !params.enable_social_bonus {
        return Ok(profile.success_rate);
    }
    let overflow = || ProfileError::Overflow {
        operation: "reputation_score",
    };
    let followers = Decimal::from(profile.follower_count() as u64);
    let bonus = followers
        .checked_mul(params.social_bonus_multiplier)
        .and_then(|b| b.checked_add(Decimal::ONE))
        .ok_or_else(overflow)?;
    profile.success_rate.checked_mul(bonus).ok_or_else(overflow)
}
