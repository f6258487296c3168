//! Year-by-year projection of deposits and interest.
//!
//! Two independent series are produced, one point per year starting at
//! year 0:
//!
//! - **Cumulative deposits**: `current_balance + deposit * periods_per_year * year`.
//!   No interest is applied; this tracks principal contributed.
//! - **Cumulative interest**: a period-by-period simulation. Within each
//!   period, interest is credited on `balance + deposit`, the deposit is
//!   added to the balance, and the balance then grows by the periodic rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use savings_core::calculations::ProjectionBuilder;
//!
//! let deposits = ProjectionBuilder::build_deposit_series(dec!(0), dec!(1000), 2, 12).unwrap();
//! let interest = ProjectionBuilder::build_interest_series(dec!(0), dec!(0), dec!(1000), 2, 12).unwrap();
//!
//! assert_eq!(deposits, vec![dec!(0), dec!(12000), dec!(24000)]);
//! assert_eq!(interest, vec![dec!(0), dec!(0), dec!(0)]);
//! ```

use rust_decimal::Decimal;

use crate::ProjectionSeries;
use crate::calculations::SavingsError;
use crate::calculations::common::{checked, periodic_rate};

/// Builds the chart series for a solved deposit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionBuilder;

impl ProjectionBuilder {
    /// Builds both series for the same inputs.
    pub fn build(
        current_balance: Decimal,
        annual_interest_rate: Decimal,
        deposit: Decimal,
        saving_term_years: u32,
        periods_per_year: u32,
    ) -> Result<ProjectionSeries, SavingsError> {
        Ok(ProjectionSeries {
            cumulative_deposits: Self::build_deposit_series(
                current_balance,
                deposit,
                saving_term_years,
                periods_per_year,
            )?,
            cumulative_interest: Self::build_interest_series(
                current_balance,
                annual_interest_rate,
                deposit,
                saving_term_years,
                periods_per_year,
            )?,
        })
    }

    /// Nominal running total of the current balance plus deposits.
    ///
    /// Each point is computed in closed form, so the final element equals
    /// `current_balance + deposit * periods_per_year * saving_term_years` exactly.
    pub fn build_deposit_series(
        current_balance: Decimal,
        deposit: Decimal,
        saving_term_years: u32,
        periods_per_year: u32,
    ) -> Result<Vec<Decimal>, SavingsError> {
        let yearly_deposit = checked(deposit.checked_mul(Decimal::from(periods_per_year)))?;

        (0..=saving_term_years)
            .map(|year| {
                let contributed = checked(yearly_deposit.checked_mul(Decimal::from(year)))?;
                checked(current_balance.checked_add(contributed))
            })
            .collect()
    }

    /// Running total of interest credited by the per-period simulation.
    pub fn build_interest_series(
        current_balance: Decimal,
        annual_interest_rate: Decimal,
        deposit: Decimal,
        saving_term_years: u32,
        periods_per_year: u32,
    ) -> Result<Vec<Decimal>, SavingsError> {
        let rate = periodic_rate(annual_interest_rate, periods_per_year)?;
        let mut series = Vec::with_capacity(saving_term_years as usize + 1);
        let mut balance = current_balance;
        let mut total_interest = Decimal::ZERO;
        series.push(total_interest);

        for _ in 0..saving_term_years {
            let mut yearly_interest = Decimal::ZERO;
            for _ in 0..periods_per_year {
                // Order matters: credit, deposit, then compound.
                let pending = checked(balance.checked_add(deposit))?;
                let credited = checked(pending.checked_mul(rate))?;
                yearly_interest = checked(yearly_interest.checked_add(credited))?;
                balance = checked(balance.checked_add(deposit))?;
                let growth = checked(balance.checked_mul(rate))?;
                balance = checked(balance.checked_add(growth))?;
            }
            total_interest = checked(total_interest.checked_add(yearly_interest))?;
            series.push(total_interest);
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::DepositSolver;
    use crate::calculations::common::round_half_up;

    // =========================================================================
    // build_deposit_series tests
    // =========================================================================

    #[test]
    fn deposit_series_has_term_plus_one_points() {
        for term in [1u32, 5, 25] {
            let series = ProjectionBuilder::build_deposit_series(dec!(10000), dec!(150), term, 26).unwrap();

            assert_eq!(series.len(), term as usize + 1);
            assert_eq!(series[0], dec!(10000));
        }
    }

    #[test]
    fn deposit_series_last_point_matches_closed_form() {
        let deposit = DepositSolver::solve(dec!(10000), dec!(50000), dec!(0.06), 10, 12).unwrap();
        let series = ProjectionBuilder::build_deposit_series(dec!(10000), deposit, 10, 12).unwrap();

        assert_eq!(series[10], dec!(10000) + deposit * dec!(12) * dec!(10));
    }

    #[test]
    fn deposit_series_ignores_interest() {
        let series = ProjectionBuilder::build_deposit_series(dec!(500), dec!(10), 3, 52).unwrap();

        assert_eq!(series, vec![dec!(500), dec!(1020), dec!(1540), dec!(2060)]);
    }

    #[test]
    fn deposit_series_declines_with_negative_deposit() {
        let series = ProjectionBuilder::build_deposit_series(dec!(1000), dec!(-10), 2, 12).unwrap();

        assert_eq!(series, vec![dec!(1000), dec!(880), dec!(760)]);
    }

    #[test]
    fn deposit_series_zero_term_is_just_balance() {
        let series = ProjectionBuilder::build_deposit_series(dec!(750), dec!(10), 0, 12).unwrap();

        assert_eq!(series, vec![dec!(750)]);
    }

    // =========================================================================
    // build_interest_series tests
    // =========================================================================

    #[test]
    fn interest_series_starts_at_zero_with_term_plus_one_points() {
        let series = ProjectionBuilder::build_interest_series(dec!(10000), dec!(0.06), dec!(200), 10, 12).unwrap();

        assert_eq!(series.len(), 11);
        assert_eq!(series[0], dec!(0));
    }

    #[test]
    fn interest_series_is_zero_at_zero_rate() {
        let deposit = DepositSolver::solve(dec!(0), dec!(12000), dec!(0), 1, 12).unwrap();
        let series = ProjectionBuilder::build_interest_series(dec!(0), dec!(0), deposit, 1, 12).unwrap();

        assert_eq!(deposit, dec!(1000.00));
        assert_eq!(series[1], dec!(0));
    }

    #[test]
    fn interest_series_follows_credit_deposit_compound_order() {
        // One period at 10%: credit (100 + 10) * 0.1 = 11, balance 110 -> 121.
        // Second period: credit (121 + 10) * 0.1 = 13.1, balance 131 -> 144.1.
        let series = ProjectionBuilder::build_interest_series(dec!(100), dec!(0.2), dec!(10), 1, 2).unwrap();

        assert_eq!(series, vec![dec!(0), dec!(24.1)]);
    }

    #[test]
    fn interest_series_is_cumulative() {
        let series = ProjectionBuilder::build_interest_series(dec!(10000), dec!(0.06), dec!(200), 10, 12).unwrap();

        for pair in series.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn interest_series_reaches_goal_gap_for_solved_deposit() {
        let deposit = DepositSolver::solve(dec!(10000), dec!(50000), dec!(0.06), 10, 12).unwrap();
        let series = ProjectionBuilder::build_interest_series(dec!(10000), dec!(0.06), deposit, 10, 12).unwrap();

        assert_eq!(round_half_up(series[10]), dec!(16826.03));
    }

    #[test]
    fn interest_series_reports_overflow() {
        let result = ProjectionBuilder::build_interest_series(Decimal::MAX, dec!(0.5), dec!(1), 1, 12);

        assert_eq!(result, Err(SavingsError::Overflow));
    }

    // =========================================================================
    // build tests
    // =========================================================================

    #[test]
    fn build_aligns_both_series() {
        let projection = ProjectionBuilder::build(dec!(2000), dec!(0.04), dec!(75), 8, 52).unwrap();

        assert_eq!(projection.cumulative_deposits.len(), projection.cumulative_interest.len());
        assert_eq!(projection.len(), 9);
    }
}
