use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ContributionFrequency;

/// Numeric inputs to one calculation pass.
///
/// Values are expected to be already parsed; the core never sees raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsParameters {
    /// Balance already saved at year 0.
    pub current_balance: Decimal,

    /// Balance to reach at the end of the term.
    pub saving_goal: Decimal,

    /// Nominal annual rate as a fraction (`0.06` for 6%).
    pub annual_interest_rate: Decimal,

    /// Length of the plan in whole years.
    pub saving_term_years: u32,

    pub frequency: ContributionFrequency,
}

impl SavingsParameters {
    pub fn periods_per_year(&self) -> u32 {
        self.frequency.periods_per_year()
    }
}
