//! # Outbound Ports (Driven Ports)

use crate::domain::entities::TradeEvent;
use shared_types::{DomainEvent, ExecutionContext, StoreError};

/// Notified after a trade has been committed, within the same call.
///
/// Implementations write their own keys through `ctx` and return the events
/// they produced. An error aborts the enclosing call.
pub trait TradeObserver: Send + Sync {
    fn on_trade_recorded(
        &self,
        ctx: &mut ExecutionContext<'_>,
        event: &TradeEvent,
    ) -> Result<Vec<DomainEvent>, StoreError>;
}
