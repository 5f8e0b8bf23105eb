//! # Execution Context
//!
//! Everything an operation may touch is passed in explicitly: the store handle
//! for the enclosing call and the block metadata. Nothing is read from
//! globals.

use crate::entities::Timestamp;
use crate::events::DomainEvent;
use crate::store::KeyValueStore;

/// Per-call context handed to every subsystem operation.
pub struct ExecutionContext<'a> {
    store: &'a mut dyn KeyValueStore,
    block_height: u64,
    block_time: Timestamp,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(store: &'a mut dyn KeyValueStore, block_height: u64, block_time: Timestamp) -> Self {
        Self {
            store,
            block_height,
            block_time,
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        &mut *self.store
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn block_time(&self) -> Timestamp {
        self.block_time
    }
}

/// Result value paired with the events the operation produced.
///
/// Subsystems never publish; the host drains `events` and forwards them.
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted<T> {
    pub value: T,
    pub events: Vec<DomainEvent>,
}

impl<T> Emitted<T> {
    pub fn new(value: T, events: Vec<DomainEvent>) -> Self {
        Self { value, events }
    }

    /// A value with no events.
    pub fn quiet(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn with_event(mut self, event: DomainEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = DomainEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Emitted<U> {
        Emitted {
            value: f(self.value),
            events: self.events,
        }
    }

    pub fn into_parts(self) -> (T, Vec<DomainEvent>) {
        (self.value, self.events)
    }
}
