//! Textual results shown above the chart.

use std::fmt;

use savings_core::{ContributionFrequency, SavingsError, SavingsPlanResult};

use crate::utils::{format_fixed, format_usd};

const BLANK: &str = "—";

/// The result lines of one recompute, or blanks when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavingsReport {
    Calculated(Box<SavingsPlanResult>),
    Unavailable {
        frequency: ContributionFrequency,
        reason: SavingsError,
    },
}

impl SavingsReport {
    pub fn deposit_sentence(&self) -> String {
        match self {
            Self::Calculated(result) => format!(
                "You need to deposit ${} {} to reach your saving goal",
                format_fixed(result.deposit),
                result.parameters.frequency
            ),
            Self::Unavailable { frequency, reason } => {
                format!("Unable to calculate a {frequency} deposit: {reason}")
            }
        }
    }

    fn amount(
        &self,
        pick: impl Fn(&SavingsPlanResult) -> rust_decimal::Decimal,
    ) -> String {
        match self {
            Self::Calculated(result) => format_usd(pick(result.as_ref())),
            Self::Unavailable { .. } => BLANK.to_string(),
        }
    }

    pub fn total_deposits(&self) -> String {
        self.amount(|result| result.total_deposits)
    }

    pub fn total_interest(&self) -> String {
        self.amount(|result| result.implied_interest)
    }

    pub fn simulated_interest(&self) -> String {
        self.amount(|result| result.simulated_interest)
    }

    pub fn total_savings(&self) -> String {
        self.amount(|result| result.parameters.saving_goal)
    }
}

impl fmt::Display for SavingsReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{}", self.deposit_sentence())?;
        writeln!(f)?;
        writeln!(f, "Total deposits:       {}", self.total_deposits())?;
        writeln!(f, "Total interest:       {}", self.total_interest())?;
        writeln!(f, "Interest accrued:     {}", self.simulated_interest())?;
        writeln!(f, "Total savings:        {}", self.total_savings())
    }
}
