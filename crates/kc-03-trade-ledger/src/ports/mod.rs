//! Ports for the trade ledger.

pub mod outbound;
