//! # Kale-Chain Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wired subsystems over a fresh store
//! └── integration/      # Cross-crate flows and randomized properties
//!     ├── scenarios.rs
//!     ├── supply.rs
//!     ├── ledger.rs
//!     ├── params.rs
//!     └── genesis.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p kc-tests
//!
//! # By area
//! cargo test -p kc-tests integration::ledger::
//!
//! # Benchmarks
//! cargo bench -p kc-tests
//! ```

pub mod fixtures;
pub mod integration;
