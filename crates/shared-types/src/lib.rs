//! # Shared Types Crate
//!
//! Types shared by every Kale-Chain subsystem.
//!
//! ## Contents
//!
//! - **Entities**: `Address`, `Coin`, `Timestamp`
//! - **Store port**: `KeyValueStore`, `BatchOperation`, `InMemoryKVStore`
//! - **Execution context**: `ExecutionContext`, `Emitted<T>`
//! - **Events**: `DomainEvent`, returned by every mutating operation
//! - **Errors**: `ErrorKind` taxonomy, `StoreError`, `ValidationError`
//!
//! ## Design Principles
//!
//! - **Explicit context**: no ambient globals. Every operation receives the
//!   store handle and block time through `ExecutionContext`.
//! - **Events are data**: subsystems never publish. They return events and the
//!   host decides where they go.
//! - **Owned key-space**: each subsystem owns its prefixes; `KeyLayout`
//!   rejects layouts where two prefixes could collide.

pub mod codec;
pub mod context;
pub mod entities;
pub mod errors;
pub mod events;
pub mod keys;
pub mod store;

pub use context::{Emitted, ExecutionContext};
pub use entities::*;
pub use errors::*;
pub use events::DomainEvent;
pub use keys::KeyLayout;
pub use store::{BatchOperation, InMemoryKVStore, KeyValueStore, ScanResult};
