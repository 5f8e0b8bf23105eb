//! # Trader Profile Store
//!
//! Owns the profile records and social params. Receives committed trades from
//! the ledger through [`TradeObserver`].

use crate::domain::entities::{FeeSplit, TraderProfile};
use crate::domain::errors::ProfileError;
use crate::domain::keys::ProfileKeys;
use crate::domain::params::SocialParams;
use crate::domain::social;
use kc_01_params::ParamStore;
use kc_03_trade_ledger::{TradeEvent, TradeObserver};
use rust_decimal::Decimal;
use shared_types::codec;
use shared_types::{Address, DomainEvent, Emitted, ExecutionContext, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    pub keys: ProfileKeys,
}

pub struct TraderProfileStore {
    config: ProfileConfig,
    params: ParamStore<SocialParams>,
}

impl TraderProfileStore {
    pub fn new(config: ProfileConfig) -> Self {
        Self {
            params: ParamStore::new(config.keys.params.clone()),
            config,
        }
    }

    pub fn params(&self) -> &ParamStore<SocialParams> {
        &self.params
    }

    pub fn keys(&self) -> &ProfileKeys {
        &self.config.keys
    }

    /// The stored profile, or the empty profile when there is none.
    ///
    /// Never fails; an unreadable record is logged and treated as absent.
    pub fn get_profile(&self, ctx: &ExecutionContext<'_>, address: &Address) -> TraderProfile {
        match self.load_profile(ctx, address) {
            Ok(Some(profile)) => profile,
            Ok(None) => TraderProfile::empty(address.clone()),
            Err(e) => {
                tracing::warn!(
                    trader = %address,
                    error = %e,
                    "[kc-04] Could not read trader profile, returning empty profile"
                );
                TraderProfile::empty(address.clone())
            }
        }
    }

    pub fn load_profile(
        &self,
        ctx: &ExecutionContext<'_>,
        address: &Address,
    ) -> Result<Option<TraderProfile>, StoreError> {
        match ctx.store().get(&self.config.keys.profile_key(address))? {
            Some(bytes) => codec::decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save_profile(
        &self,
        ctx: &mut ExecutionContext<'_>,
        profile: &TraderProfile,
    ) -> Result<(), StoreError> {
        let bytes = codec::encode(profile)?;
        ctx.store_mut()
            .put(&self.config.keys.profile_key(&profile.address), &bytes)
    }

    /// Fold a committed trade into the trader's profile, creating it if needed.
    pub fn upsert_on_trade(
        &self,
        ctx: &mut ExecutionContext<'_>,
        event: &TradeEvent,
    ) -> Result<Vec<DomainEvent>, StoreError> {
        let mut events = Vec::new();
        let mut profile = match self.load_profile(ctx, &event.trader)? {
            Some(profile) => profile,
            None => {
                events.push(DomainEvent::ProfileCreated {
                    trader: event.trader.clone(),
                });
                TraderProfile::empty(event.trader.clone())
            }
        };

        profile.apply_trade(event.trader_profit);
        self.save_profile(ctx, &profile)?;

        tracing::debug!(
            trader = %profile.address,
            total_trades = profile.total_trades,
            success_rate = %profile.success_rate,
            "[kc-04] Profile updated"
        );
        Ok(events)
    }

    pub fn follow(
        &self,
        ctx: &mut ExecutionContext<'_>,
        follower: &Address,
        trader: &Address,
    ) -> Result<Emitted<()>, ProfileError> {
        if follower == trader {
            return Err(ProfileError::SelfFollow {
                trader: trader.clone(),
            });
        }
        let mut profile = self.require_profile(ctx, trader)?;
        if !profile.followers.insert(follower.clone()) {
            return Err(ProfileError::AlreadyFollowing {
                follower: follower.clone(),
                trader: trader.clone(),
            });
        }
        self.save_profile(ctx, &profile)?;

        tracing::info!(follower = %follower, trader = %trader, "[kc-04] 👥 Follow");
        Ok(Emitted::quiet(()).with_event(DomainEvent::TraderFollowed {
            follower: follower.clone(),
            trader: trader.clone(),
        }))
    }

    pub fn unfollow(
        &self,
        ctx: &mut ExecutionContext<'_>,
        follower: &Address,
        trader: &Address,
    ) -> Result<Emitted<()>, ProfileError> {
        let mut profile = self.require_profile(ctx, trader)?;
        if !profile.followers.remove(follower) {
            return Err(ProfileError::NotFollowing {
                follower: follower.clone(),
                trader: trader.clone(),
            });
        }
        self.save_profile(ctx, &profile)?;

        tracing::info!(follower = %follower, trader = %trader, "[kc-04] Unfollow");
        Ok(Emitted::quiet(()).with_event(DomainEvent::TraderUnfollowed {
            follower: follower.clone(),
            trader: trader.clone(),
        }))
    }

    /// Add `amount` to the trader's stake. Creates the profile if absent.
    pub fn stake(
        &self,
        ctx: &mut ExecutionContext<'_>,
        trader: &Address,
        amount: u128,
    ) -> Result<Emitted<TraderProfile>, ProfileError> {
        if amount == 0 {
            return Err(ProfileError::ZeroAmount);
        }

        let mut events = Vec::new();
        let mut profile = match self.load_profile(ctx, trader)? {
            Some(profile) => profile,
            None => {
                events.push(DomainEvent::ProfileCreated {
                    trader: trader.clone(),
                });
                TraderProfile::empty(trader.clone())
            }
        };

        let resulting = profile
            .staked_amount
            .checked_add(amount)
            .ok_or(ProfileError::Overflow { operation: "stake" })?;
        self.check_stake_floor(ctx, resulting)?;

        profile.staked_amount = resulting;
        self.save_profile(ctx, &profile)?;

        tracing::info!(trader = %trader, staked_amount = resulting, "[kc-04] Stake updated");
        events.push(DomainEvent::StakeUpdated {
            trader: trader.clone(),
            staked_amount: resulting,
        });
        Ok(Emitted::new(profile, events))
    }

    /// Withdraw `amount` of stake. The remainder must be zero or meet the
    /// minimum.
    pub fn unstake(
        &self,
        ctx: &mut ExecutionContext<'_>,
        trader: &Address,
        amount: u128,
    ) -> Result<Emitted<TraderProfile>, ProfileError> {
        if amount == 0 {
            return Err(ProfileError::ZeroAmount);
        }
        let mut profile = self.require_profile(ctx, trader)?;
        let resulting = profile
            .staked_amount
            .checked_sub(amount)
            .ok_or(ProfileError::InsufficientStake {
                requested: amount,
                staked: profile.staked_amount,
            })?;
        self.check_stake_floor(ctx, resulting)?;

        profile.staked_amount = resulting;
        self.save_profile(ctx, &profile)?;

        tracing::info!(trader = %trader, staked_amount = resulting, "[kc-04] Stake updated");
        Ok(Emitted::quiet(profile).with_event(DomainEvent::StakeUpdated {
            trader: trader.clone(),
            staked_amount: resulting,
        }))
    }

    pub fn split_fee(&self, ctx: &ExecutionContext<'_>, fee: u128) -> Result<FeeSplit, ProfileError> {
        social::split_fee(fee, &self.params.get(ctx))
    }

    pub fn reputation_score(
        &self,
        ctx: &ExecutionContext<'_>,
        address: &Address,
    ) -> Result<Decimal, ProfileError> {
        let profile = self.get_profile(ctx, address);
        social::reputation_score(&profile, &self.params.get(ctx))
    }

    /// Every stored profile, ordered by address bytes.
    pub fn list_profiles(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<TraderProfile>, ProfileError> {
        ctx.store()
            .prefix_scan(&self.config.keys.profile_prefix)?
            .iter()
            .map(|(_, value)| codec::decode(value).map_err(ProfileError::from))
            .collect()
    }

    /// Write a profile verbatim. Genesis import only.
    pub fn import_profile(
        &self,
        ctx: &mut ExecutionContext<'_>,
        profile: &TraderProfile,
    ) -> Result<(), ProfileError> {
        profile.validate()?;
        self.save_profile(ctx, profile)?;
        Ok(())
    }

    fn require_profile(
        &self,
        ctx: &ExecutionContext<'_>,
        trader: &Address,
    ) -> Result<TraderProfile, ProfileError> {
        self.load_profile(ctx, trader)?
            .ok_or_else(|| ProfileError::NotFound {
                trader: trader.clone(),
            })
    }

    fn check_stake_floor(&self, ctx: &ExecutionContext<'_>, resulting: u128) -> Result<(), ProfileError> {
        let minimum = self.params.get(ctx).minimum_stake_amount.amount;
        if resulting != 0 && resulting < minimum {
            return Err(ProfileError::BelowMinimumStake { resulting, minimum });
        }
        Ok(())
    }
}

impl TradeObserver for TraderProfileStore {
    fn on_trade_recorded(
        &self,
        ctx: &mut ExecutionContext<'_>,
        event: &TradeEvent,
    ) -> Result<Vec<DomainEvent>, StoreError> {
        self.upsert_on_trade(ctx, event)
    }
}
