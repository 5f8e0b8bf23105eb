//! `kale-node` binary. See the library docs for the startup sequence.

use anyhow::{Context, Result};
use kale_node::RuntimeConfig;
use kale_telemetry::init_telemetry;
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    init_telemetry(&config.telemetry).context("Failed to initialize telemetry")?;

    info!("===========================================");
    info!("  Kale-Chain Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let exported = kale_node::run(&config)?;

    match &config.export_path {
        Some(path) => {
            fs::write(path, &exported)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            info!(path = %path.display(), "Genesis exported");
        }
        None => println!("{}", exported),
    }

    Ok(())
}
