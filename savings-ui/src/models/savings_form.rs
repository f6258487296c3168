use std::fmt;

use savings_core::{ContributionFrequency, SavingsParameters};

use crate::config::FormDefaults;
use crate::utils::{parse_percentage, parse_term_years, parse_tolerant_number};

/// One of the five editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CurrentBalance,
    SavingGoal,
    Frequency,
    InterestRate,
    SavingTerm,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            Self::CurrentBalance,
            Self::SavingGoal,
            Self::Frequency,
            Self::InterestRate,
            Self::SavingTerm,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CurrentBalance => "Current balance",
            Self::SavingGoal => "Savings goal",
            Self::Frequency => "Deposit frequency",
            Self::InterestRate => "Interest rate",
            Self::SavingTerm => "Saving term",
        }
    }

    /// Command word used to edit this field in the interactive session.
    pub fn command(&self) -> &'static str {
        match self {
            Self::CurrentBalance => "balance",
            Self::SavingGoal => "goal",
            Self::Frequency => "frequency",
            Self::InterestRate => "rate",
            Self::SavingTerm => "term",
        }
    }

    pub fn from_command(word: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.command().eq_ignore_ascii_case(word))
    }
}

/// Raw text of the calculator inputs, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsForm {
    pub current_balance: String,
    pub saving_goal: String,
    pub frequency: String,
    pub interest_rate: String,
    pub saving_term: String,
    defaults: FormDefaults,
}

impl SavingsForm {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            current_balance: defaults.current_balance.clone(),
            saving_goal: defaults.saving_goal.clone(),
            frequency: defaults.frequency.clone(),
            interest_rate: defaults.interest_rate.clone(),
            saving_term: defaults.saving_term.clone(),
            defaults,
        }
    }

    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        match field {
            FormField::CurrentBalance => &self.current_balance,
            FormField::SavingGoal => &self.saving_goal,
            FormField::Frequency => &self.frequency,
            FormField::InterestRate => &self.interest_rate,
            FormField::SavingTerm => &self.saving_term,
        }
    }

    pub fn set(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match field {
            FormField::CurrentBalance => self.current_balance = value,
            FormField::SavingGoal => self.saving_goal = value,
            FormField::Frequency => self.frequency = value,
            FormField::InterestRate => self.interest_rate = value,
            FormField::SavingTerm => self.saving_term = value,
        }
    }

    /// Restores every field to its default text.
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults.clone());
    }

    pub fn frequency(&self) -> ContributionFrequency {
        ContributionFrequency::from_label(&self.frequency)
    }

    /// Coerces the raw text into calculation inputs. Never fails; bad text
    /// becomes zero.
    pub fn to_parameters(&self) -> SavingsParameters {
        SavingsParameters {
            current_balance: parse_tolerant_number(&self.current_balance),
            saving_goal: parse_tolerant_number(&self.saving_goal),
            annual_interest_rate: parse_percentage(&self.interest_rate),
            saving_term_years: parse_term_years(&self.saving_term),
            frequency: self.frequency(),
        }
    }
}

impl Default for SavingsForm {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

impl fmt::Display for SavingsForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for field in FormField::all() {
            writeln!(f, "{:<18} {}", format!("{}:", field.label()), self.get(*field))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_form_parses_to_default_parameters() {
        let params = SavingsForm::default().to_parameters();

        assert_eq!(params.current_balance, dec!(10000));
        assert_eq!(params.saving_goal, dec!(50000));
        assert_eq!(params.annual_interest_rate, dec!(0.06));
        assert_eq!(params.saving_term_years, 10);
        assert_eq!(params.frequency, ContributionFrequency::Monthly);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = SavingsForm::default();
        form.set(FormField::SavingGoal, "$1");
        form.set(FormField::Frequency, "weekly");

        form.reset();

        assert_eq!(form, SavingsForm::default());
    }

    #[test]
    fn reset_uses_configured_defaults() {
        let defaults = FormDefaults {
            saving_term: "5".to_string(),
            ..FormDefaults::default()
        };
        let mut form = SavingsForm::new(defaults);
        form.set(FormField::SavingTerm, "30");

        form.reset();

        assert_eq!(form.saving_term, "5");
    }

    #[test]
    fn garbage_input_becomes_zero() {
        let mut form = SavingsForm::default();
        form.set(FormField::CurrentBalance, "lots");
        form.set(FormField::Frequency, "yearly");

        let params = form.to_parameters();

        assert_eq!(params.current_balance, dec!(0));
        assert_eq!(params.frequency, ContributionFrequency::Monthly);
    }

    #[test]
    fn from_command_matches_field_words() {
        assert_eq!(FormField::from_command("RATE"), Some(FormField::InterestRate));
        assert_eq!(FormField::from_command("balance"), Some(FormField::CurrentBalance));
        assert_eq!(FormField::from_command("print"), None);
    }
}
