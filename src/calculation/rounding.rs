//! Currency rounding.
//!
//! Every monetary figure the engine reports goes through [`round_half_up`],
//! so `.5` cases resolve the same way in every rule.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to a whole number, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(25, 1)), Decimal::new(3, 0));
/// assert_eq!(round_half_up(Decimal::new(35, 1)), Decimal::new(4, 0));
/// assert_eq!(round_half_up(Decimal::new(249, 2)), Decimal::new(2, 0));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a non-negative amount to whole currency units.
///
/// Negative amounts yield 0; amounts too large for `u64` saturate at
/// `u64::MAX`.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::to_currency_units;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_currency_units(Decimal::new(120405, 1)), 12041);
/// assert_eq!(to_currency_units(Decimal::MAX), u64::MAX);
/// ```
pub fn to_currency_units(value: Decimal) -> u64 {
    if value < Decimal::ZERO {
        return 0;
    }
    round_half_up(value).to_u64().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up_not_to_even() {
        assert_eq!(round_half_up(dec("0.5")), dec("1"));
        assert_eq!(round_half_up(dec("2.5")), dec("3"));
        assert_eq!(round_half_up(dec("68999.5")), dec("69000"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_half_up(dec("2.4999")), dec("2"));
    }

    #[test]
    fn test_to_currency_units() {
        assert_eq!(to_currency_units(dec("69000")), 69000);
        assert_eq!(to_currency_units(dec("12040.5")), 12041);
        assert_eq!(to_currency_units(Decimal::ZERO), 0);
    }

    #[test]
    fn test_to_currency_units_saturates_above_u64() {
        assert_eq!(to_currency_units(dec("18446744073709551615")), u64::MAX);
        assert_eq!(to_currency_units(dec("18446744073709551616")), u64::MAX);
        assert_eq!(to_currency_units(Decimal::MAX), u64::MAX);
    }

    #[test]
    fn test_to_currency_units_negative_is_zero() {
        assert_eq!(to_currency_units(dec("-10")), 0);
    }
}
