//! # Genesis Service
//!
//! `init_genesis` / `export_genesis` for the economic core.

use crate::config::{GenesisConfig, SupplyImportPolicy};
use crate::domain::errors::GenesisError;
use crate::domain::snapshot::{GenesisSnapshot, SocialGenesis, SupplyGenesis, TradingGenesis};
use kc_02_supply::{SupplyController, TOTAL_SUPPLY};
use kc_03_trade_ledger::{PageRequest, TradeLedger};
use kc_04_trader_profiles::TraderProfileStore;
use shared_types::{DomainEvent, Emitted, ExecutionContext};
use std::sync::Arc;

pub struct GenesisIO {
    supply: Arc<SupplyController>,
    ledger: Arc<TradeLedger>,
    profiles: Arc<TraderProfileStore>,
    config: GenesisConfig,
}

impl GenesisIO {
    /// Wire the subsystems together. Fails if their key prefixes overlap.
    pub fn new(
        supply: Arc<SupplyController>,
        ledger: Arc<TradeLedger>,
        profiles: Arc<TraderProfileStore>,
        config: GenesisConfig,
    ) -> Result<Self, GenesisError> {
        supply
            .keys()
            .layout()
            .merge(ledger.keys().layout())
            .merge(profiles.keys().layout())
            .validate()?;

        Ok(Self {
            supply,
            ledger,
            profiles,
            config,
        })
    }

    pub fn config(&self) -> &GenesisConfig {
        &self.config
    }

    /// Apply a snapshot. Nothing is written unless the whole snapshot passes
    /// validation and, when a recipient is named, the supply mint would be
    /// accepted under the snapshot's bank params.
    pub fn init_genesis(
        &self,
        ctx: &mut ExecutionContext<'_>,
        snapshot: GenesisSnapshot,
    ) -> Result<Emitted<()>, GenesisError> {
        snapshot.validate()?;

        let counter = self.ledger.trade_counter(ctx)?;
        match snapshot.first_trade_id() {
            Some(first) if Some(first) != counter.checked_add(1) => {
                return Err(GenesisError::CounterMismatch {
                    expected: counter.saturating_add(1),
                    got: first,
                });
            }
            None if snapshot.trading.trade_counter != counter => {
                return Err(GenesisError::CounterMismatch {
                    expected: counter,
                    got: snapshot.trading.trade_counter,
                });
            }
            _ => {}
        }

        let recipient = snapshot.supply.recipient()?;
        let already_initialized = self.supply.is_initialized(ctx)?;
        if let Some(recipient) = &recipient {
            if !already_initialized {
                self.supply
                    .check_initialize(&snapshot.supply.params, recipient.as_str())?;
            } else if self.config.supply_import_policy == SupplyImportPolicy::Fail {
                return Err(GenesisError::SupplyAlreadyInitialized);
            }
        }

        let GenesisSnapshot {
            supply,
            trading,
            social,
        } = snapshot;

        let mut events = Vec::new();
        events.extend(self.supply.params().set(ctx, supply.params)?.events);
        events.extend(self.ledger.params().set(ctx, trading.params)?.events);
        events.extend(self.profiles.params().set(ctx, social.params)?.events);

        let restore_profiles = social.profiles.is_some();
        let profile_count = social.profiles.as_ref().map_or(0, Vec::len) as u64;
        for profile in social.profiles.iter().flatten() {
            self.profiles.import_profile(ctx, profile)?;
        }

        let trade_count = trading.trade_events.len() as u64;
        for event in trading.trade_events {
            let replayed = self.ledger.replay_trade(ctx, event, !restore_profiles)?;
            events.extend(replayed.events);
        }

        match recipient {
            Some(recipient) if !already_initialized => {
                let minted = self.supply.initialize(ctx, recipient.as_str())?;
                events.extend(minted.events);
            }
            Some(recipient) => {
                tracing::info!(
                    recipient = %recipient,
                    "[kc-05] Supply already initialized, skipping genesis mint"
                );
            }
            None => {}
        }

        tracing::info!(
            trade_events = trade_count,
            profiles = profile_count,
            "[kc-05] 🌱 Genesis imported"
        );
        events.push(DomainEvent::GenesisImported {
            trade_events: trade_count,
            profiles: profile_count,
        });
        Ok(Emitted::new((), events))
    }

    /// Snapshot the current state.
    pub fn export_genesis(&self, ctx: &ExecutionContext<'_>) -> Result<GenesisSnapshot, GenesisError> {
        let mut trade_events = Vec::new();
        let mut request = PageRequest::default();
        loop {
            let page = self.ledger.list_all_trades(ctx, &request)?;
            trade_events.extend(page.trades);
            match page.next_cursor {
                Some(cursor) => request.cursor = Some(cursor),
                None => break,
            }
        }

        let profiles = if self.config.export_profiles {
            Some(self.profiles.list_profiles(ctx)?)
        } else {
            None
        };

        let supply_initialized = self.supply.total_supply()?.amount >= TOTAL_SUPPLY;

        tracing::info!(
            trade_events = trade_events.len(),
            profiles = profiles.as_ref().map_or(0, Vec::len),
            "[kc-05] Genesis exported"
        );

        Ok(GenesisSnapshot {
            supply: SupplyGenesis {
                params: self.supply.params().get(ctx),
                initial_supply_recipient: None,
                supply_initialized,
            },
            trading: TradingGenesis {
                params: self.ledger.params().get(ctx),
                trade_events,
                trade_counter: self.ledger.trade_counter(ctx)?,
            },
            social: SocialGenesis {
                params: self.profiles.params().get(ctx),
                profiles,
            },
        })
    }
}
