//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic goes through `Decimal`; `f64` appears only at
//! the storage/serialization boundary. Rounding is fixed at 2 decimal
//! places, half-up, for every value the engine persists.

use rust_decimal::prelude::*;

use super::LedgerError;

/// Rounding: 2 decimal places, half-up.
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i64 = 9999;
/// Maximum allowed adjustment (tip/discount/tender)
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Convert an f64 boundary value to Decimal.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a Decimal back to the f64 boundary representation.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Round to the engine's monetary precision.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an f64 amount to monetary precision, staying in Decimal internally.
pub fn round_money_f64(value: f64) -> f64 {
    to_f64(round_money(to_decimal(value)))
}

#[inline]
fn require_finite(value: f64, field: &str) -> Result<(), LedgerError> {
    if !value.is_finite() {
        return Err(LedgerError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Validate a quantity for an order line.
pub fn validate_quantity(quantity: i64) -> Result<(), LedgerError> {
    if quantity < 1 {
        return Err(LedgerError::Validation(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(LedgerError::Validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

/// Validate a unit price snapshot.
pub fn validate_price(price: f64) -> Result<(), LedgerError> {
    require_finite(price, "price")?;
    if price < 0.0 {
        return Err(LedgerError::Validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(LedgerError::Validation(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Validate a non-negative adjustment (tip, discount, tendered amount).
pub fn validate_adjustment(value: f64, field: &str) -> Result<(), LedgerError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(LedgerError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}
