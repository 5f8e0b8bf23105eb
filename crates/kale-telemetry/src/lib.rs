//! # Kale Telemetry
//!
//! Subscriber setup for the Kale-Chain node and tooling.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kale_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("telemetry");
//!     tracing::info!("[kc-00] node starting");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KALE_SERVICE_NAME` | `kale-chain` | Service name attached to startup logs |
//! | `KALE_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `KALE_JSON_LOGS` | `false` (`true` in containers) | JSON formatted output |
//! | `KALE_NETWORK` | `devnet` | Network name |

mod config;
mod logging;
mod subscriber;

pub use config::TelemetryConfig;
pub use subscriber::{build_filter, init_telemetry};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to install global subscriber: {0}")]
    Install(String),
}
