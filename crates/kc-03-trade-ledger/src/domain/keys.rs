//! # Ledger Key Layout
//!
//! ```text
//! event:   event_prefix || id (u64 BE)
//! index:   index_prefix || len(trader) (u8) || trader || id (u64 BE)
//! counter: counter
//! params:  params
//! ```
//!
//! Big-endian ids make byte order equal numeric order, so prefix scans come
//! back sorted by id. The length byte keeps one trader's index range from
//! overlapping another trader whose address extends it.

use shared_types::codec::encode_u64;
use shared_types::keys::prefixed;
use shared_types::{Address, KeyLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerKeys {
    pub event_prefix: Vec<u8>,
    pub trader_index_prefix: Vec<u8>,
    pub counter: Vec<u8>,
    pub params: Vec<u8>,
}

impl Default for LedgerKeys {
    fn default() -> Self {
        Self {
            event_prefix: vec![0x01],
            trader_index_prefix: vec![0x02],
            counter: vec![0x03],
            params: vec![0x04],
        }
    }
}

impl LedgerKeys {
    pub fn event_key(&self, id: u64) -> Vec<u8> {
        prefixed(&self.event_prefix, &encode_u64(id))
    }

    /// Prefix covering every index entry of one trader.
    pub fn trader_prefix(&self, trader: &Address) -> Vec<u8> {
        let bytes = trader.as_bytes();
        let mut key = Vec::with_capacity(self.trader_index_prefix.len() + 1 + bytes.len() + 8);
        key.extend_from_slice(&self.trader_index_prefix);
        // Address::MAX_LEN < 256
        key.push(bytes.len() as u8);
        key.extend_from_slice(bytes);
        key
    }

    pub fn trader_index_key(&self, trader: &Address, id: u64) -> Vec<u8> {
        let mut key = self.trader_prefix(trader);
        key.extend_from_slice(&encode_u64(id));
        key
    }

    pub fn layout(&self) -> KeyLayout {
        KeyLayout::new()
            .with("trade_event", self.event_prefix.clone())
            .with("trade_index", self.trader_index_prefix.clone())
            .with("trade_counter", self.counter.clone())
            .with("trading_params", self.params.clone())
    }
}

/// Id encoded in the last 8 bytes of an event or index key.
pub fn id_from_key(key: &[u8]) -> Option<u64> {
    let start = key.len().checked_sub(8)?;
    shared_types::codec::decode_u64(&key[start..]).ok()
}
