//! Record codec for values persisted in the key-value store.
//!
//! All subsystems encode records with bincode so the byte layout is the same
//! whichever crate wrote the value.

use crate::errors::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(value).map_err(|e| StoreError::Codec {
        message: e.to_string(),
    })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Codec {
        message: e.to_string(),
    })
}

/// Big-endian encoding so numeric keys sort the same as the numbers.
pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn decode_u64(bytes: &[u8]) -> Result<u64, StoreError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| StoreError::Codec {
        message: format!("expected 8 bytes for u64, got {}", bytes.len()),
    })?;
    Ok(u64::from_be_bytes(arr))
}
