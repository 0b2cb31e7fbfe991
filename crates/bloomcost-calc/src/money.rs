//! Money rounding
//!
//! All money columns round half-to-even at 2 decimal places, and each
//! derived column is rounded exactly once - intermediate values are never
//! re-rounded on the way into the next stage.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round a money value to 2 decimal places, half-to-even
pub fn round2(value: f64) -> f64 {
    round_dp(value, 2)
}

/// Round to `dp` decimal places, half-to-even (banker's rounding)
///
/// Non-finite inputs pass through unchanged; divisors are validated before
/// any arithmetic reaches this point.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    match Decimal::from_f64_retain(value) {
        Some(d) => d
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .unwrap_or(value),
        None => value,
    }
}
