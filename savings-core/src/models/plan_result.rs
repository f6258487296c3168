use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ProjectionSeries, SavingsParameters};

/// Everything produced by one full calculation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPlanResult {
    pub parameters: SavingsParameters,

    /// Required deposit per period. Negative when the current balance alone
    /// already grows past the goal.
    pub deposit: Decimal,

    pub projection: ProjectionSeries,

    /// Current balance plus every nominal deposit over the term.
    pub total_deposits: Decimal,

    /// Interest needed to close the gap: `saving_goal - total_deposits`.
    pub implied_interest: Decimal,

    /// Interest the per-period simulation actually accrued by the last year.
    pub simulated_interest: Decimal,
}
