use kc_01_params::{
    parse_bounded_amount, validate_precision, validate_unit_interval, ModuleParams,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingParams {
    pub max_trade_amount: String,
    pub min_trade_amount: String,
    pub trade_enabled: bool,
    pub fee_rate: Decimal,
    pub price_precision: u32,
    pub amount_precision: u32,
}

impl Default for TradingParams {
    fn default() -> Self {
        Self {
            max_trade_amount: "1000000000".to_string(),
            min_trade_amount: "10000".to_string(),
            trade_enabled: true,
            fee_rate: Decimal::new(3, 3),
            price_precision: 6,
            amount_precision: 6,
        }
    }
}

impl TradingParams {
    /// `(min, max)` admission bounds.
    pub fn bounds(&self) -> Result<(u128, u128), ValidationError> {
        let min = parse_bounded_amount("min_trade_amount", &self.min_trade_amount)?;
        let max = parse_bounded_amount("max_trade_amount", &self.max_trade_amount)?;
        Ok((min, max))
    }
}

impl ModuleParams for TradingParams {
    const MODULE: &'static str = "kalefi";

    fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = self.bounds()?;
        if min > max {
            return Err(ValidationError::new(
                "min_trade_amount",
                format!("{} exceeds max_trade_amount {}", min, max),
            ));
        }
        validate_unit_interval("fee_rate", self.fee_rate)?;
        validate_precision("price_precision", self.price_precision)?;
        validate_precision("amount_precision", self.amount_precision)?;
        Ok(())
    }
}
