//! # Kale Node
//!
//! Reference host for the Kale-Chain economic core.
//!
//! ## Startup Sequence
//!
//! 1. Load `RuntimeConfig` from the environment
//! 2. Initialize telemetry
//! 3. Wire subsystems over an in-memory store and bank
//! 4. Import the genesis snapshot (file or built-in default)
//! 5. Record demo trades, if configured
//! 6. Export the resulting state as genesis JSON

pub mod config;
pub mod container;

pub use config::RuntimeConfig;
pub use container::KaleContainer;

use anyhow::{Context, Result};
use kc_05_genesis::{default_genesis, GenesisSnapshot};
use std::fs;

/// Load the configured genesis, or the default one.
pub fn load_genesis(config: &RuntimeConfig) -> Result<GenesisSnapshot> {
    match &config.genesis_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read genesis file {}", path.display()))?;
            GenesisSnapshot::from_json(&json)
                .with_context(|| format!("Failed to parse genesis file {}", path.display()))
        }
        None => Ok(default_genesis()),
    }
}

/// Steps 3 to 6 of the startup sequence. Returns the exported JSON.
pub fn run(config: &RuntimeConfig) -> Result<String> {
    let snapshot = load_genesis(config)?;
    let mut node = KaleContainer::new(config.genesis.clone())?;

    let events = node.import(snapshot, config.block_height, config.block_time)?;
    kale_telemetry::log_event!(info, "kc-00", "Genesis applied", events = events.len());
    for event in &events {
        tracing::debug!(event = event.event_type(), "[kc-00] Event");
    }

    if config.demo_trades > 0 {
        node.record_demo_trades(
            &config.demo_trader,
            config.demo_trades,
            config.block_height,
            config.block_time,
        )?;
    }

    let exported = node.export(config.block_height, config.block_time)?;
    exported.to_json_pretty().context("Failed to encode exported genesis")
}
