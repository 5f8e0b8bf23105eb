//! Applying decimal rates to integer base-unit amounts.

use rust_decimal::Decimal;

/// `floor(amount * rate)` for a non-negative `rate`, in exact integer
/// arithmetic. `None` on overflow or a negative rate.
pub fn apply_rate(amount: u128, rate: Decimal) -> Option<u128> {
    let rate = rate.normalize();
    let mantissa = u128::try_from(rate.mantissa()).ok()?;
    let denominator = 10u128.checked_pow(rate.scale())?;

    // amount * m / d == q * m + r * m / d, with amount = q * d + r
    let q = amount / denominator;
    let r = amount % denominator;
    let whole = q.checked_mul(mantissa)?;
    let part = r.checked_mul(mantissa)? / denominator;
    whole.checked_add(part)
}
