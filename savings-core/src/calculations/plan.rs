//! Full calculation pass: solve the deposit, then project it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use savings_core::{ContributionFrequency, SavingsParameters, SavingsPlan};
//!
//! let parameters = SavingsParameters {
//!     current_balance: dec!(0),
//!     saving_goal: dec!(12000),
//!     annual_interest_rate: dec!(0),
//!     saving_term_years: 1,
//!     frequency: ContributionFrequency::Monthly,
//! };
//!
//! let result = SavingsPlan::calculate(&parameters).unwrap();
//!
//! assert_eq!(result.deposit, dec!(1000));
//! assert_eq!(result.total_deposits, dec!(12000));
//! assert_eq!(result.implied_interest, dec!(0));
//! ```

use tracing::debug;

use crate::calculations::common::checked;
use crate::calculations::{DepositSolver, ProjectionBuilder, SavingsError};
use crate::{SavingsParameters, SavingsPlanResult};

/// Stateless pipeline from parameters to a complete [`SavingsPlanResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsPlan;

impl SavingsPlan {
    /// Runs the solver and both projections for `parameters`.
    ///
    /// # Errors
    ///
    /// Propagates any [`SavingsError`] from the solver or the projection.
    pub fn calculate(parameters: &SavingsParameters) -> Result<SavingsPlanResult, SavingsError> {
        let periods_per_year = parameters.periods_per_year();
        let term = parameters.saving_term_years;

        let deposit = DepositSolver::solve(
            parameters.current_balance,
            parameters.saving_goal,
            parameters.annual_interest_rate,
            term,
            periods_per_year,
        )?;

        let projection = ProjectionBuilder::build(
            parameters.current_balance,
            parameters.annual_interest_rate,
            deposit,
            term,
            periods_per_year,
        )?;

        let total_deposits = projection
            .cumulative_deposits
            .last()
            .copied()
            .unwrap_or(parameters.current_balance);
        let implied_interest = checked(parameters.saving_goal.checked_sub(total_deposits))?;
        let simulated_interest = projection
            .cumulative_interest
            .last()
            .copied()
            .unwrap_or_default();

        debug!(
            %deposit,
            %total_deposits,
            %implied_interest,
            %simulated_interest,
            frequency = %parameters.frequency,
            term,
            "savings plan calculated"
        );

        Ok(SavingsPlanResult {
            parameters: parameters.clone(),
            deposit,
            projection,
            total_deposits,
            implied_interest,
            simulated_interest,
        })
    }
}
