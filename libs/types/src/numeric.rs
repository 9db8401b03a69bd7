//! Average computation and rounding
//!
//! Uses rust_decimal so that rounding is decided on the decimal value a
//! reader sees, not on its binary approximation. All reported averages use
//! HALF_UP rounding (midpoint away from zero) to 2 decimal places.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Decimal places kept in every reported average
pub const AVERAGE_DECIMALS: u32 = 2;

/// Round to 2 decimal places, half away from zero.
///
/// The value is taken at its shortest round-trip decimal form first, so
/// `2.345` rounds to `2.35` even though its f64 is slightly below 2.345.
/// Non-finite values are returned unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let decimal = Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value));

    match decimal {
        Some(d) => d
            .round_dp_with_strategy(AVERAGE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse::<f64>()
            .unwrap_or(value),
        None => value,
    }
}

/// Rounded arithmetic mean of a set of integers; 0.0 when empty.
pub fn average_of_ints(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    round2(sum as f64 / values.len() as f64)
}

/// Rounded arithmetic mean of a set of floats; 0.0 when empty.
pub fn average_of_floats(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    round2(sum / values.len() as f64)
}
