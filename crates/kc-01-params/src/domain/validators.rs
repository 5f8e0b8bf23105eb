//! Field validators shared by the params records of every module.

use rust_decimal::Decimal;
use shared_types::ValidationError;

pub const MIN_PRECISION: u32 = 1;
pub const MAX_PRECISION: u32 = 18;

/// Parse a string-encoded non-negative integer amount.
///
/// Only ASCII digits are accepted; signs, whitespace and decimal points are
/// rejected. Values must fit in `u128`.
pub fn parse_bounded_amount(field: &str, raw: &str) -> Result<u128, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(field, "amount is empty"));
    }
    if let Some(ch) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::new(
            field,
            format!("{:?} is not a non-negative integer (unexpected {:?})", raw, ch),
        ));
    }
    raw.parse::<u128>()
        .map_err(|_| ValidationError::new(field, format!("{} is out of range", raw)))
}

/// Decimal must lie in `[0, 1]`.
pub fn validate_unit_interval(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new(
            field,
            format!("{} cannot be negative", value),
        ));
    }
    if value > Decimal::ONE {
        return Err(ValidationError::new(
            field,
            format!("{} cannot be greater than 1", value),
        ));
    }
    Ok(())
}

/// Percentages drawn from the same budget must sum to at most 1.
pub fn validate_shared_budget(shares: &[(&str, Decimal)]) -> Result<(), ValidationError> {
    let mut total = Decimal::ZERO;
    for (_, share) in shares {
        total = total.checked_add(*share).ok_or_else(|| {
            ValidationError::new(budget_field(shares), "sum of percentages overflows")
        })?;
    }
    if total > Decimal::ONE {
        return Err(ValidationError::new(
            budget_field(shares),
            format!("sum of percentages {} cannot exceed 1", total),
        ));
    }
    Ok(())
}

fn budget_field(shares: &[(&str, Decimal)]) -> String {
    shares
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Precision (number of fractional digits) must be within `1..=18`.
pub fn validate_precision(field: &str, precision: u32) -> Result<(), ValidationError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(ValidationError::new(
            field,
            format!(
                "{} must be between {} and {}",
                precision, MIN_PRECISION, MAX_PRECISION
            ),
        ));
    }
    Ok(())
}
