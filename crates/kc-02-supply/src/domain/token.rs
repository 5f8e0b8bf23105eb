//! KALE token constants and denom metadata.

use serde::{Deserialize, Serialize};
use shared_types::Coin;

/// Base (smallest) denomination.
pub const KALE_DENOM: &str = "ukale";

/// Display denomination.
pub const DISPLAY_DENOM: &str = "kale";

/// 1 kale = 10^6 ukale.
pub const DISPLAY_EXPONENT: u32 = 6;

/// Fixed total supply in ukale: 100,000,000 KALE.
pub const TOTAL_SUPPLY: u128 = 100_000_000 * 10u128.pow(DISPLAY_EXPONENT);

/// Module account that receives freshly minted coins.
pub const MODULE_NAME: &str = "kalebank";

pub fn total_supply_coin() -> Coin {
    Coin::new(KALE_DENOM, TOTAL_SUPPLY)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    pub base: String,
    pub display: String,
}

pub fn token_metadata() -> TokenMetadata {
    TokenMetadata {
        name: "Kale".to_string(),
        symbol: "KALE".to_string(),
        description: "Native token of the KaleFi platform for staking and governance".to_string(),
        denom_units: vec![
            DenomUnit {
                denom: KALE_DENOM.to_string(),
                exponent: 0,
                aliases: vec!["microkale".to_string()],
            },
            DenomUnit {
                denom: DISPLAY_DENOM.to_string(),
                exponent: DISPLAY_EXPONENT,
                aliases: Vec::new(),
            },
        ],
        base: KALE_DENOM.to_string(),
        display: DISPLAY_DENOM.to_string(),
    }
}
