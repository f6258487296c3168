//! Informational overlay listing the calculation assumptions.

use std::fmt;

const ASSUMPTIONS: &[&str] = &[
    "Deposits are made at the start of each period (weekly, fortnightly or monthly).",
    "Interest compounds at the same frequency as deposits.",
    "The interest rate stays fixed for the whole saving term.",
    "Fees and taxes are not included.",
    "Total interest is the savings goal less the current balance and all deposits.",
];

/// Open/closed state of the assumptions overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssumptionsOverlay {
    open: bool,
}

impl AssumptionsOverlay {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl fmt::Display for AssumptionsOverlay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "┌─ Assumptions ─")?;
        for line in ASSUMPTIONS {
            writeln!(f, "│ • {line}")?;
        }
        writeln!(f, "└─ type `close` to dismiss")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_starts_closed_and_toggles() {
        let mut overlay = AssumptionsOverlay::default();
        assert!(!overlay.is_open());

        overlay.open();
        assert!(overlay.is_open());

        overlay.close();
        assert!(!overlay.is_open());
    }

    #[test]
    fn overlay_lists_every_assumption() {
        let text = AssumptionsOverlay::default().to_string();

        assert_eq!(text.matches('•').count(), ASSUMPTIONS.len());
    }
}
