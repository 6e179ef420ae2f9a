//! Monetary helpers
//!
//! Amounts cross the wire as `f64`; arithmetic happens in `Decimal` and
//! results are rounded half-up to whole rupiah on the way out.

use rust_decimal::prelude::*;

/// Whole-rupiah rounding (no decimal places)
const DECIMAL_PLACES: u32 = 0;

/// Convert f64 to Decimal for calculation.
///
/// Non-finite input degrades to zero - bad data must render as "no amount",
/// never crash a receipt.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value = ?value, "non-finite amount in receipt, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded half-up to whole rupiah.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_non_finite() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(to_f64(to_decimal(1999.5)), 2000.0);
        assert_eq!(to_f64(to_decimal(1999.4)), 1999.0);
        assert_eq!(to_f64(to_decimal(-0.5)), -1.0);
    }
}
