use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Year-by-year projection used to drive the chart.
///
/// Both sequences hold one point per year, starting at year 0, and always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Current balance plus nominal deposits made so far (no interest).
    pub cumulative_deposits: Vec<Decimal>,

    /// Interest credited so far by the per-period simulation.
    pub cumulative_interest: Vec<Decimal>,
}

impl ProjectionSeries {
    /// Number of points in each series (term + 1).
    pub fn len(&self) -> usize {
        self.cumulative_deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative_deposits.is_empty()
    }

    /// Year index labels, `"0"` through the last year.
    pub fn year_labels(&self) -> Vec<String> {
        (0..self.len()).map(|year| year.to_string()).collect()
    }

    /// Iterates `(year, deposits, interest)` triples.
    pub fn years(&self) -> impl Iterator<Item = (usize, Decimal, Decimal)> + '_ {
        self.cumulative_deposits
            .iter()
            .zip(&self.cumulative_interest)
            .enumerate()
            .map(|(year, (deposits, interest))| (year, *deposits, *interest))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample() -> ProjectionSeries {
        ProjectionSeries {
            cumulative_deposits: vec![dec!(100), dec!(200), dec!(300)],
            cumulative_interest: vec![dec!(0), dec!(5), dec!(15)],
        }
    }

    #[test]
    fn year_labels_start_at_zero() {
        assert_eq!(sample().year_labels(), vec!["0", "1", "2"]);
    }

    #[test]
    fn years_pairs_aligned_points() {
        let years: Vec<_> = sample().years().collect();

        assert_eq!(years[2], (2, dec!(300), dec!(15)));
        assert_eq!(years.len(), 3);
    }
}
