//! # Trade Ledger (kc-03)
//!
//! Append-only record of admitted trades. Each trade gets the next value of a
//! persisted counter as its id; the event, the per-trader index entry and the
//! counter are written in a single atomic batch.
//!
//! ## Domain Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Gated admission | A trade is admitted iff trading is enabled and `min <= amount <= max` |
//! | No partial writes | A rejected trade leaves counter, events and index byte-for-byte unchanged |
//! | Dense ids | Ids are `"1"`, `"2"`, ... with no gaps; the counter advances only with its event |
//! | Consistent index | Every event has exactly one trader-index entry |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Trade events, params, fee math, key layout, errors
//! - `ports/` - `TradeObserver` outbound port (implemented by trader profiles)
//! - `service.rs` - `TradeLedger`
//!
//! ## Usage
//!
//! ```ignore
//! let ledger = TradeLedger::new(LedgerConfig::default())
//!     .with_observer(profiles.clone());
//! let recorded = ledger.record_trade(&mut ctx, &trader, 1_000_000)?;
//! assert_eq!(recorded.value.id, "1");
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{FeeQuote, PageRequest, TradeEvent, TradePage};
pub use domain::errors::LedgerError;
pub use domain::fees::{format_amount, quote_fee};
pub use domain::keys::LedgerKeys;
pub use domain::params::TradingParams;
pub use ports::outbound::TradeObserver;
pub use service::{LedgerConfig, TradeLedger};
