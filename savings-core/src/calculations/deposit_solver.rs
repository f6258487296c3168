//! Solves for the periodic deposit that reaches a savings goal.
//!
//! Deposits are made at the start of each period (annuity due), so the
//! future value of the deposits is:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `n`    | `saving_term_years * periods_per_year` |
//! | `r`    | `annual_interest_rate / periods_per_year` |
//! | `F`    | `((1 + r)^n - 1) / r * (1 + r)` |
//! | deposit | `(saving_goal - current_balance * (1 + r)^n) / F` |
//!
//! At a zero periodic rate `F` reduces to `n`, its limit as `r -> 0`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use savings_core::calculations::DepositSolver;
//! use savings_core::calculations::common::round_half_up;
//!
//! let deposit = DepositSolver::solve(
//!     dec!(10000.00), // current_balance
//!     dec!(50000.00), // saving_goal
//!     dec!(0.06),     // annual_interest_rate
//!     10,             // saving_term_years
//!     12,             // periods_per_year
//! )
//! .unwrap();
//!
//! assert_eq!(round_half_up(deposit), dec!(193.12));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use tracing::trace;

use crate::calculations::SavingsError;
use crate::calculations::common::{checked, periodic_rate};

/// Closed-form annuity-due solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepositSolver;

impl DepositSolver {
    /// Returns the deposit required each period to reach `saving_goal`.
    ///
    /// A negative deposit is a valid answer: the current balance compounds past
    /// the goal on its own.
    ///
    /// # Errors
    ///
    /// - [`SavingsError::InvalidTerm`] if the term covers zero periods
    /// - [`SavingsError::DegenerateFactor`] if the periodic rate is exactly -100%
    /// - [`SavingsError::Overflow`] if an intermediate value leaves the decimal range
    pub fn solve(
        current_balance: Decimal,
        saving_goal: Decimal,
        annual_interest_rate: Decimal,
        saving_term_years: u32,
        periods_per_year: u32,
    ) -> Result<Decimal, SavingsError> {
        let total_periods = saving_term_years
            .checked_mul(periods_per_year)
            .ok_or(SavingsError::Overflow)?;
        if total_periods == 0 {
            return Err(SavingsError::InvalidTerm);
        }

        let n = Decimal::from(total_periods);
        let rate = periodic_rate(annual_interest_rate, periods_per_year)?;
        let growth_base = checked(Decimal::ONE.checked_add(rate))?;
        let growth = checked(growth_base.checked_powi(i64::from(total_periods)))?;

        // A rate too small to register in (1 + r) behaves like a zero rate.
        if rate.is_zero() || growth == Decimal::ONE {
            trace!(%n, "zero periodic rate, using arithmetic series");
            let gap = checked(saving_goal.checked_sub(current_balance))?;
            return checked(gap.checked_div(n));
        }

        let factor = Self::future_value_factor(growth, rate, growth_base)?;
        if factor.is_zero() {
            return Err(SavingsError::DegenerateFactor);
        }

        let grown_balance = checked(current_balance.checked_mul(growth))?;
        let gap = checked(saving_goal.checked_sub(grown_balance))?;
        trace!(%rate, %growth, %factor, "solved annuity factor");

        checked(gap.checked_div(factor))
    }

    /// Annuity-due factor `((1 + r)^n - 1) / r * (1 + r)`.
    fn future_value_factor(
        growth: Decimal,
        rate: Decimal,
        growth_base: Decimal,
    ) -> Result<Decimal, SavingsError> {
        let accumulated = checked(growth.checked_sub(Decimal::ONE))?;
        let ordinary = checked(accumulated.checked_div(rate))?;
        checked(ordinary.checked_mul(growth_base))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    // =========================================================================
    // standard scenarios
    // =========================================================================

    #[test]
    fn solve_monthly_scenario() {
        let deposit = DepositSolver::solve(dec!(10000), dec!(50000), dec!(0.06), 10, 12).unwrap();

        assert_eq!(round_half_up(deposit), dec!(193.12));
    }

    #[test]
    fn solve_weekly_requires_smaller_deposits_than_monthly() {
        let monthly = DepositSolver::solve(dec!(10000), dec!(50000), dec!(0.06), 10, 12).unwrap();
        let weekly = DepositSolver::solve(dec!(10000), dec!(50000), dec!(0.06), 10, 52).unwrap();

        assert!(weekly < monthly);
        assert!(weekly > dec!(0));
    }

    #[test]
    fn solve_returns_negative_deposit_when_balance_already_exceeds_goal() {
        let deposit = DepositSolver::solve(dec!(50000), dec!(50000), dec!(0.06), 10, 12).unwrap();

        assert!(deposit < dec!(0));
    }

    #[test]
    fn solve_is_zero_when_balance_grows_exactly_to_goal_at_zero_rate() {
        let deposit = DepositSolver::solve(dec!(5000), dec!(5000), dec!(0), 3, 26).unwrap();

        assert_eq!(deposit, dec!(0));
    }

    // =========================================================================
    // zero rate limit
    // =========================================================================

    #[test]
    fn solve_zero_rate_is_simple_division() {
        let deposit = DepositSolver::solve(dec!(0), dec!(12000), dec!(0), 1, 12).unwrap();

        assert_eq!(deposit, dec!(1000.00));
    }

    #[test]
    fn solve_zero_rate_matches_arithmetic_series_for_all_frequencies() {
        let cases = [
            (dec!(0), dec!(12000)),
            (dec!(10000), dec!(50000)),
            (dec!(2500.50), dec!(999.99)),
        ];

        for (balance, goal) in cases {
            for term in [1u32, 7, 30] {
                for periods in [12u32, 26, 52] {
                    let deposit = DepositSolver::solve(balance, goal, dec!(0), term, periods).unwrap();
                    let expected = (goal - balance) / Decimal::from(term * periods);

                    assert_eq!(deposit, expected, "balance={balance} goal={goal} term={term} periods={periods}");
                }
            }
        }
    }

    // =========================================================================
    // error cases
    // =========================================================================

    #[test]
    fn solve_zero_term_reports_invalid_term() {
        for rate in [dec!(0), dec!(0.06), dec!(-0.02)] {
            for periods in [12u32, 26, 52] {
                let result = DepositSolver::solve(dec!(10000), dec!(50000), rate, 0, periods);

                assert_eq!(result, Err(SavingsError::InvalidTerm));
            }
        }
    }

    #[test]
    fn solve_zero_periods_reports_invalid_term() {
        let result = DepositSolver::solve(dec!(10000), dec!(50000), dec!(0.06), 10, 0);

        assert_eq!(result, Err(SavingsError::InvalidTerm));
    }

    #[test]
    fn solve_minus_hundred_percent_periodic_rate_is_degenerate() {
        let result = DepositSolver::solve(dec!(10000), dec!(50000), dec!(-12), 1, 12);

        assert_eq!(result, Err(SavingsError::DegenerateFactor));
    }

    #[test]
    fn solve_reports_overflow_for_runaway_growth() {
        let result = DepositSolver::solve(dec!(10000), dec!(50000), dec!(12), 100, 12);

        assert_eq!(result, Err(SavingsError::Overflow));
    }

    // =========================================================================
    // monotonicity
    // =========================================================================

    #[test]
    fn solve_deposit_decreases_as_rate_increases() {
        let rates = [dec!(0), dec!(0.01), dec!(0.03), dec!(0.06), dec!(0.09), dec!(0.15)];
        let deposits: Vec<Decimal> = rates
            .iter()
            .map(|rate| DepositSolver::solve(dec!(10000), dec!(50000), *rate, 10, 12).unwrap())
            .collect();

        for pair in deposits.windows(2) {
            assert!(pair[1] < pair[0], "{} should be below {}", pair[1], pair[0]);
        }
    }
}
