//! Common utility functions for savings calculations.
//!
//! This module provides shared functionality used by the solver and the
//! projection builder, including rounding and checked decimal arithmetic.

use rust_decimal::Decimal;

use crate::calculations::SavingsError;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(216.354)), dec!(216.35));
/// assert_eq!(round_half_up(dec!(216.355)), dec!(216.36));
/// assert_eq!(round_half_up(dec!(-216.355)), dec!(-216.36)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts the result of a `checked_*` operation into a [`SavingsError::Overflow`].
pub(crate) fn checked(value: Option<Decimal>) -> Result<Decimal, SavingsError> {
    value.ok_or(SavingsError::Overflow)
}

/// Returns the interest rate applied per contribution period.
///
/// Zero periods per year yields a zero rate; no period ever applies it.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_core::calculations::common::periodic_rate;
///
/// assert_eq!(periodic_rate(dec!(0.06), 12), Ok(dec!(0.005)));
/// ```
pub fn periodic_rate(
    annual_interest_rate: Decimal,
    periods_per_year: u32,
) -> Result<Decimal, SavingsError> {
    if periods_per_year == 0 {
        return Ok(Decimal::ZERO);
    }
    checked(annual_interest_rate.checked_div(Decimal::from(periods_per_year)))
}
