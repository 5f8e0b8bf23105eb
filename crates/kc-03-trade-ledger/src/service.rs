//! # Trade Ledger Service
//!
//! Admission, id allocation and indexed storage of trade events.

use crate::domain::entities::{parse_trade_id, PageRequest, TradeEvent, TradePage};
use crate::domain::errors::LedgerError;
use crate::domain::fees::{format_amount, quote_fee};
use crate::domain::keys::{id_from_key, LedgerKeys};
use crate::domain::params::TradingParams;
use crate::ports::outbound::TradeObserver;
use kc_01_params::ParamStore;
use shared_types::codec::{self, decode_u64, encode_u64};
use shared_types::{
    Address, BatchOperation, DomainEvent, Emitted, ExecutionContext, StoreError,
};
use std::sync::Arc;

/// Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub keys: LedgerKeys,
    /// Page size when the request does not specify one.
    pub default_page_limit: usize,
    /// Upper bound on any requested page size.
    pub max_page_limit: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            keys: LedgerKeys::default(),
            default_page_limit: 100,
            max_page_limit: 1000,
        }
    }
}

pub struct TradeLedger {
    config: LedgerConfig,
    params: ParamStore<TradingParams>,
    observers: Vec<Arc<dyn TradeObserver>>,
}

impl TradeLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            params: ParamStore::new(config.keys.params.clone()),
            config,
            observers: Vec::new(),
        }
    }

    /// Register an observer notified after every committed trade.
    pub fn with_observer(mut self, observer: Arc<dyn TradeObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn params(&self) -> &ParamStore<TradingParams> {
        &self.params
    }

    pub fn keys(&self) -> &LedgerKeys {
        &self.config.keys
    }

    /// Last assigned trade id; 0 before the first trade.
    pub fn trade_counter(&self, ctx: &ExecutionContext<'_>) -> Result<u64, LedgerError> {
        match ctx.store().get(&self.config.keys.counter)? {
            Some(bytes) => Ok(decode_u64(&bytes)?),
            None => Ok(0),
        }
    }

    pub fn record_trade(
        &self,
        ctx: &mut ExecutionContext<'_>,
        trader: &Address,
        amount: u128,
    ) -> Result<Emitted<TradeEvent>, LedgerError> {
        self.record_trade_with_profit(ctx, trader, amount, 0)
    }

    /// Admit a trade carrying the realized PnL reported with it.
    ///
    /// Rejected trades write nothing.
    pub fn record_trade_with_profit(
        &self,
        ctx: &mut ExecutionContext<'_>,
        trader: &Address,
        amount: u128,
        trader_profit: i128,
    ) -> Result<Emitted<TradeEvent>, LedgerError> {
        let params = self.params.get(ctx);
        if !params.trade_enabled {
            return Err(LedgerError::TradingDisabled);
        }

        let (min, max) = params.bounds()?;
        if amount < min || amount > max {
            return Err(LedgerError::OutOfBounds { amount, min, max });
        }

        let quote = quote_fee(amount, &params)?;
        let id = self
            .trade_counter(ctx)?
            .checked_add(1)
            .ok_or(LedgerError::CounterExhausted)?;

        let event = TradeEvent {
            id: id.to_string(),
            trader: trader.clone(),
            amount,
            fee: quote.fee,
            trader_profit,
            created_at: ctx.block_time(),
        };

        let emitted = self.commit(ctx, id, event, true)?;

        tracing::info!(
            trade_id = %emitted.value.id,
            trader = %trader,
            amount = %format_amount(amount, params.amount_precision),
            fee = %format_amount(quote.fee, params.amount_precision),
            "[kc-03] 📈 Trade recorded"
        );

        Ok(emitted)
    }

    /// Re-apply a historical trade (genesis import).
    ///
    /// The id must continue the counter. Trading-enabled and bounds checks
    /// are not applied to history. Observers run only when `notify` is set.
    pub fn replay_trade(
        &self,
        ctx: &mut ExecutionContext<'_>,
        event: TradeEvent,
        notify: bool,
    ) -> Result<Emitted<TradeEvent>, LedgerError> {
        let expected = self
            .trade_counter(ctx)?
            .checked_add(1)
            .ok_or(LedgerError::CounterExhausted)?;

        match event.numeric_id() {
            Some(id) if id == expected => {
                tracing::debug!(trade_id = id, trader = %event.trader, "[kc-03] Replaying trade");
                self.commit(ctx, id, event, notify)
            }
            _ => Err(LedgerError::NonSequentialId {
                expected,
                got: event.id,
            }),
        }
    }

    /// Event, index entry and counter in one atomic batch, then observers.
    fn commit(
        &self,
        ctx: &mut ExecutionContext<'_>,
        id: u64,
        event: TradeEvent,
        notify: bool,
    ) -> Result<Emitted<TradeEvent>, LedgerError> {
        let keys = &self.config.keys;
        let id_bytes = encode_u64(id).to_vec();

        ctx.store_mut().atomic_batch_write(vec![
            BatchOperation::put(keys.event_key(id), codec::encode(&event)?),
            BatchOperation::put(keys.trader_index_key(&event.trader, id), id_bytes.clone()),
            BatchOperation::put(keys.counter.clone(), id_bytes),
        ])?;

        let mut events = vec![DomainEvent::TradeRecorded {
            trade_id: event.id.clone(),
            trader: event.trader.clone(),
            amount: event.amount,
            fee: event.fee,
        }];

        if notify {
            for observer in &self.observers {
                let produced = observer
                    .on_trade_recorded(ctx, &event)
                    .map_err(LedgerError::Observer)?;
                events.extend(produced);
            }
        }

        Ok(Emitted::new(event, events))
    }

    /// Look up a trade by id. Ids that are not canonical numbers are not found.
    pub fn get_trade(&self, ctx: &ExecutionContext<'_>, id: &str) -> Result<TradeEvent, LedgerError> {
        let not_found = || LedgerError::NotFound { id: id.to_string() };
        let numeric = parse_trade_id(id).ok_or_else(not_found)?;
        self.load_event(ctx, numeric)?.ok_or_else(not_found)
    }

    /// Every trade of `trader`, ascending by id.
    pub fn list_trades_by_trader(
        &self,
        ctx: &ExecutionContext<'_>,
        trader: &Address,
    ) -> Result<Vec<TradeEvent>, LedgerError> {
        let prefix = self.config.keys.trader_prefix(trader);
        let entries = ctx.store().prefix_scan(&prefix)?;

        let mut trades = Vec::with_capacity(entries.len());
        for (key, _) in entries {
            let id = id_from_key(&key).ok_or_else(|| StoreError::Codec {
                message: format!("malformed trader index key {}", hex::encode(&key)),
            })?;
            let event = self.load_event(ctx, id)?.ok_or_else(|| StoreError::Codec {
                message: format!("trader index points at missing trade {}", id),
            })?;
            trades.push(event);
        }
        Ok(trades)
    }

    /// One page of all trades, ascending by id.
    pub fn list_all_trades(
        &self,
        ctx: &ExecutionContext<'_>,
        page: &PageRequest,
    ) -> Result<TradePage, LedgerError> {
        let keys = &self.config.keys;
        let limit = match page.limit {
            None | Some(0) => self.config.default_page_limit,
            Some(n) => n.min(self.config.max_page_limit),
        };
        let start = match &page.cursor {
            Some(cursor) => keys.event_key(decode_cursor(cursor)?),
            None => keys.event_prefix.clone(),
        };

        let mut rows = ctx
            .store()
            .scan_from(&keys.event_prefix, &start, limit.saturating_add(1))?;

        let next_cursor = if rows.len() > limit {
            let next = rows
                .get(limit)
                .and_then(|(key, _)| id_from_key(key))
                .map(encode_cursor);
            rows.truncate(limit);
            next
        } else {
            None
        };

        let trades = rows
            .iter()
            .map(|(_, value)| codec::decode(value))
            .collect::<Result<Vec<TradeEvent>, _>>()?;

        Ok(TradePage {
            trades,
            next_cursor,
        })
    }

    fn load_event(&self, ctx: &ExecutionContext<'_>, id: u64) -> Result<Option<TradeEvent>, LedgerError> {
        match ctx.store().get(&self.config.keys.event_key(id))? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

fn encode_cursor(id: u64) -> String {
    hex::encode(encode_u64(id))
}

fn decode_cursor(cursor: &str) -> Result<u64, LedgerError> {
    let invalid = || LedgerError::InvalidCursor {
        cursor: cursor.to_string(),
    };
    let bytes = hex::decode(cursor).map_err(|_| invalid())?;
    decode_u64(&bytes).map_err(|_| invalid())
}
