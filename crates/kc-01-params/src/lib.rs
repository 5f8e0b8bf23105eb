//! # Params Store (kc-01)
//!
//! Every economic sub-domain (bank, trading, social) owns one params record.
//! The record is validated before every write and stored as a single value,
//! so it is always overwritten atomically.
//!
//! ## Domain Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Validate-before-write | `set` never touches the store with params that fail `validate()` |
//! | Total reads | `get` returns the defaults when the record is absent or unreadable |
//!
//! ## Usage
//!
//! ```ignore
//! let store: ParamStore<TradingParams> = ParamStore::new(vec![0x04]);
//! let params = store.get(&ctx);
//! store.set(&mut ctx, TradingParams { trade_enabled: false, ..params })?;
//! ```

pub mod domain;
pub mod store;

pub use domain::errors::ParamsError;
pub use domain::rates::apply_rate;
pub use domain::validators::{
    parse_bounded_amount, validate_precision, validate_shared_budget, validate_unit_interval,
    MAX_PRECISION, MIN_PRECISION,
};
pub use domain::ModuleParams;
pub use store::ParamStore;
