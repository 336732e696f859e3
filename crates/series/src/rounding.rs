//! Decimal rounding for float results.

use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every reported price is rounded to.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Round `value` to `places` decimal places, ties away from zero.
///
/// Rounds the shortest decimal text of the float (what `Display` prints), not
/// its exact binary expansion: `2.675` is stored as `2.67499999...` but rounds
/// to `2.68` here.
///
/// Non-finite values, and finite values too large or too small to be
/// represented as a [`Decimal`], are returned unchanged.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let Ok(decimal) = Decimal::from_str(&value.to_string()) else {
        return value;
    };

    decimal
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value)
}
