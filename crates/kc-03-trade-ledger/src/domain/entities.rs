//! # Ledger Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, Timestamp};

/// An admitted trade. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeEvent {
    /// Decimal string of the counter value assigned at admission.
    pub id: String,
    pub trader: Address,
    pub amount: u128,
    /// Fee quoted at admission time.
    pub fee: u128,
    /// Realized PnL reported with the trade; zero when none was reported.
    pub trader_profit: i128,
    pub created_at: Timestamp,
}

impl TradeEvent {
    /// Numeric id, if `id` is the canonical decimal form of a `u64`.
    pub fn numeric_id(&self) -> Option<u64> {
        parse_trade_id(&self.id)
    }
}

/// Parse a trade id. Only canonical decimal strings are accepted: no sign,
/// no leading zeros, no whitespace.
pub fn parse_trade_id(id: &str) -> Option<u64> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if id.len() > 1 && id.starts_with('0') {
        return None;
    }
    id.parse().ok()
}

/// Result of `quote_fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub fee: u128,
    pub net_amount: u128,
}

/// Page request for `list_all_trades`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Opaque cursor from a previous `TradePage::next_cursor`.
    pub cursor: Option<String>,
    /// Page size; `None` or `0` means the configured default.
    pub limit: Option<usize>,
}

impl PageRequest {
    pub fn first(limit: usize) -> Self {
        Self {
            cursor: None,
            limit: Some(limit),
        }
    }

    pub fn after(cursor: impl Into<String>, limit: usize) -> Self {
        Self {
            cursor: Some(cursor.into()),
            limit: Some(limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradePage {
    pub trades: Vec<TradeEvent>,
    /// `None` when this is the last page.
    pub next_cursor: Option<String>,
}
