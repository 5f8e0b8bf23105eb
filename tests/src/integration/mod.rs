//! Cross-crate integration tests.

pub mod genesis;
pub mod ledger;
pub mod params;
pub mod scenarios;
