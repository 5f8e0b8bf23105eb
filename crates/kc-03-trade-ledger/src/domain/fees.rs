//! Fee quoting and amount formatting.

use super::entities::FeeQuote;
use super::errors::LedgerError;
use super::params::TradingParams;
use kc_01_params::apply_rate;

/// `fee = floor(amount * fee_rate)`, `net_amount = amount - fee`.
pub fn quote_fee(amount: u128, params: &TradingParams) -> Result<FeeQuote, LedgerError> {
    let fee = apply_rate(amount, params.fee_rate).ok_or(LedgerError::FeeOverflow { amount })?;
    Ok(FeeQuote {
        fee,
        net_amount: amount.saturating_sub(fee),
    })
}

/// Render a base-unit amount with `precision` fractional digits.
///
/// `format_amount(1_500_000, 6) == "1.500000"`.
pub fn format_amount(amount: u128, precision: u32) -> String {
    if precision == 0 {
        return amount.to_string();
    }
    let digits = format!("{:0>width$}", amount, width = precision as usize + 1);
    let split = digits.len() - precision as usize;
    format!("{}.{}", &digits[..split], &digits[split..])
}
