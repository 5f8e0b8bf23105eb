//! # Runtime Configuration
//!
//! Everything the reference host needs, read from the environment.

use kale_telemetry::TelemetryConfig;
use kc_05_genesis::GenesisConfig;
use std::env;
use std::path::PathBuf;

/// Trader used for demo trades when `KALE_DEMO_TRADER` is unset.
pub const DEFAULT_DEMO_TRADER: &str = "kale1demotrader";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Genesis JSON to import. `None` means the default genesis.
    pub genesis_path: Option<PathBuf>,
    /// Where to write the exported genesis. `None` means stdout.
    pub export_path: Option<PathBuf>,
    pub block_height: u64,
    /// Block timestamp (unix seconds) stamped on recorded trades.
    pub block_time: u64,
    /// Number of demo trades to record after import.
    pub demo_trades: u32,
    pub demo_trader: String,
    pub genesis: GenesisConfig,
    pub telemetry: TelemetryConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            genesis_path: None,
            export_path: None,
            block_height: 1,
            block_time: 0,
            demo_trades: 0,
            demo_trader: DEFAULT_DEMO_TRADER.to_string(),
            genesis: GenesisConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KALE_GENESIS_FILE`: Genesis JSON to import (default: built-in genesis)
    /// - `KALE_EXPORT_FILE`: Export destination (default: stdout)
    /// - `KALE_BLOCK_HEIGHT`: Block height for the execution context (default: 1)
    /// - `KALE_BLOCK_TIME`: Block timestamp in unix seconds (default: 0)
    /// - `KALE_DEMO_TRADES`: Demo trades to record (default: 0)
    /// - `KALE_DEMO_TRADER`: Demo trader address (default: kale1demotrader)
    ///
    /// Genesis and telemetry settings come from their own `from_env`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            genesis_path: env::var("KALE_GENESIS_FILE").ok().map(PathBuf::from),
            export_path: env::var("KALE_EXPORT_FILE").ok().map(PathBuf::from),
            block_height: parse_var("KALE_BLOCK_HEIGHT").unwrap_or(defaults.block_height),
            block_time: parse_var("KALE_BLOCK_TIME").unwrap_or(defaults.block_time),
            demo_trades: parse_var("KALE_DEMO_TRADES").unwrap_or(defaults.demo_trades),
            demo_trader: env::var("KALE_DEMO_TRADER").unwrap_or(defaults.demo_trader),
            genesis: GenesisConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
