//! # Core Domain Entities
//!
//! Value types every subsystem speaks in: account addresses, coins and
//! block timestamps.

use crate::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp in seconds (block time).
pub type Timestamp = u64;

/// Human-readable part every Kale account address starts with.
pub const ADDRESS_HRP: &str = "kale";

/// Separator between the human-readable part and the address body.
pub const ADDRESS_SEPARATOR: char = '1';

/// A well-formed Kale account address (`kale1...`).
///
/// The inner string is private: the only way to obtain an `Address` is
/// through [`Address::parse`], so every instance in the system is valid.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Maximum total length, matching the bech32 limit.
    pub const MAX_LEN: usize = 90;

    /// Parse and validate a raw address string.
    ///
    /// Rules: non-empty, starts with `kale1`, body of at least one lowercase
    /// ASCII alphanumeric character, at most [`Address::MAX_LEN`] characters.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        if raw.is_empty() {
            return Err(AddressError::Empty);
        }
        if raw.len() > Self::MAX_LEN {
            return Err(AddressError::TooLong {
                len: raw.len(),
                max: Self::MAX_LEN,
            });
        }

        let prefix_len = ADDRESS_HRP.len() + ADDRESS_SEPARATOR.len_utf8();
        let has_prefix = raw.starts_with(ADDRESS_HRP)
            && raw[ADDRESS_HRP.len()..].starts_with(ADDRESS_SEPARATOR);
        if !has_prefix {
            return Err(AddressError::MissingPrefix {
                expected: format!("{}{}", ADDRESS_HRP, ADDRESS_SEPARATOR),
            });
        }

        let body = &raw[prefix_len..];
        if body.is_empty() {
            return Err(AddressError::EmptyBody);
        }
        if let Some((position, ch)) = body
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        {
            return Err(AddressError::InvalidCharacter {
                ch,
                position: position + prefix_len,
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An amount of a single denomination, in its smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(denom, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
