//! # Subsystem Container
//!
//! Owns the store and bank and wires the subsystems together:
//!
//! ```text
//! SupplyController ──→ InMemoryBank
//! TradeLedger ──observer──→ TraderProfileStore
//! GenesisIO ──→ all of the above
//! ```

use anyhow::{Context, Result};
use kc_02_supply::{InMemoryBank, SupplyConfig, SupplyController};
use kc_03_trade_ledger::{LedgerConfig, TradeEvent, TradeLedger};
use kc_04_trader_profiles::{ProfileConfig, TraderProfileStore};
use kc_05_genesis::{GenesisConfig, GenesisIO, GenesisSnapshot};
use shared_types::{Address, DomainEvent, ExecutionContext, InMemoryKVStore};
use std::sync::Arc;

pub struct KaleContainer {
    store: InMemoryKVStore,
    pub bank: Arc<InMemoryBank>,
    pub supply: Arc<SupplyController>,
    pub ledger: Arc<TradeLedger>,
    pub profiles: Arc<TraderProfileStore>,
    pub genesis: GenesisIO,
}

impl KaleContainer {
    pub fn new(config: GenesisConfig) -> Result<Self> {
        let bank = Arc::new(InMemoryBank::new());
        let supply = Arc::new(SupplyController::new(bank.clone(), SupplyConfig::default()));
        let profiles = Arc::new(TraderProfileStore::new(ProfileConfig::default()));
        let ledger =
            Arc::new(TradeLedger::new(LedgerConfig::default()).with_observer(profiles.clone()));
        let genesis = GenesisIO::new(supply.clone(), ledger.clone(), profiles.clone(), config)
            .context("Failed to wire subsystems")?;

        Ok(Self {
            store: InMemoryKVStore::new(),
            bank,
            supply,
            ledger,
            profiles,
            genesis,
        })
    }

    pub fn store(&self) -> &InMemoryKVStore {
        &self.store
    }

    pub fn import(
        &mut self,
        snapshot: GenesisSnapshot,
        block_height: u64,
        block_time: u64,
    ) -> Result<Vec<DomainEvent>> {
        let mut ctx = ExecutionContext::new(&mut self.store, block_height, block_time);
        let emitted = self
            .genesis
            .init_genesis(&mut ctx, snapshot)
            .context("Genesis import failed")?;
        Ok(emitted.events)
    }

    /// Record `count` trades for `trader`, walking up from the minimum
    /// allowed amount and alternating winning and losing trades.
    pub fn record_demo_trades(
        &mut self,
        trader: &str,
        count: u32,
        block_height: u64,
        block_time: u64,
    ) -> Result<Vec<TradeEvent>> {
        let trader = Address::parse(trader).context("Invalid demo trader address")?;
        let mut ctx = ExecutionContext::new(&mut self.store, block_height, block_time);
        let (min, max) = self
            .ledger
            .params()
            .get(&ctx)
            .bounds()
            .context("Trading params unreadable")?;

        let mut recorded = Vec::with_capacity(count as usize);
        for i in 0..count {
            let amount = min.saturating_mul(u128::from(i) + 1).min(max);
            let profit = if i % 2 == 0 { 1_000 } else { -500 };
            let emitted = self
                .ledger
                .record_trade_with_profit(&mut ctx, &trader, amount, profit)
                .with_context(|| format!("Demo trade {} rejected", i + 1))?;
            recorded.push(emitted.value);
        }

        tracing::info!(trader = %trader, count, "[kc-00] Demo trades recorded");
        Ok(recorded)
    }

    pub fn export(&mut self, block_height: u64, block_time: u64) -> Result<GenesisSnapshot> {
        let ctx = ExecutionContext::new(&mut self.store, block_height, block_time);
        self.genesis
            .export_genesis(&ctx)
            .context("Genesis export failed")
    }
}
