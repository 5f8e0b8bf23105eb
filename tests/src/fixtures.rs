//! Shared test fixtures.

use kc_02_supply::{InMemoryBank, SupplyConfig, SupplyController};
use kc_03_trade_ledger::{LedgerConfig, TradeLedger};
use kc_04_trader_profiles::{ProfileConfig, TraderProfileStore};
use kc_05_genesis::{GenesisConfig, GenesisIO};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{Address, ExecutionContext, InMemoryKVStore};
use std::sync::Arc;

/// Block time used by fixtures unless a test needs its own.
pub const BLOCK_TIME: u64 = 1_700_000_000;

/// All subsystems wired the way the node wires them, over a fresh store.
pub struct Harness {
    pub store: InMemoryKVStore,
    pub bank: Arc<InMemoryBank>,
    pub supply: Arc<SupplyController>,
    pub ledger: Arc<TradeLedger>,
    pub profiles: Arc<TraderProfileStore>,
    pub genesis: GenesisIO,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_genesis_config(GenesisConfig::default())
    }

    pub fn with_genesis_config(config: GenesisConfig) -> Self {
        Self::with_parts(InMemoryBank::new(), config)
    }

    /// Wire the subsystems over `bank` instead of the default one.
    pub fn with_bank(bank: InMemoryBank) -> Self {
        Self::with_parts(bank, GenesisConfig::default())
    }

    fn with_parts(bank: InMemoryBank, config: GenesisConfig) -> Self {
        let bank = Arc::new(bank);
        let supply = Arc::new(SupplyController::new(bank.clone(), SupplyConfig::default()));
        let profiles = Arc::new(TraderProfileStore::new(ProfileConfig::default()));
        let ledger =
            Arc::new(TradeLedger::new(LedgerConfig::default()).with_observer(profiles.clone()));
        let genesis = GenesisIO::new(supply.clone(), ledger.clone(), profiles.clone(), config)
            .expect("default key layout is collision free");

        Self {
            store: InMemoryKVStore::new(),
            bank,
            supply,
            ledger,
            profiles,
            genesis,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Context at height 1 and `BLOCK_TIME` over `store`.
///
/// Takes the store rather than the harness so the services stay borrowable.
pub fn ctx(store: &mut InMemoryKVStore) -> ExecutionContext<'_> {
    ExecutionContext::new(store, 1, BLOCK_TIME)
}

pub fn addr(raw: &str) -> Address {
    Address::parse(raw).expect("fixture address is valid")
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A well-formed `kale1...` address with a random lowercase body.
pub fn random_address(rng: &mut StdRng) -> Address {
    let len = rng.gen_range(3..=20);
    let body: String = (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect();
    addr(&format!("kale1{}", body))
}
