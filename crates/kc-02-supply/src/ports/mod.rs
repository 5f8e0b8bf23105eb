//! Ports for the supply controller.

pub mod outbound;
