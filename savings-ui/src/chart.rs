//! Stacked bar chart of cumulative deposits and interest.
//!
//! The calculation never touches a chart handle. The app owns the current
//! [`ChartRenderer::Chart`] and hands it back to the renderer on every
//! recompute; the renderer destroys it and returns a fresh one.

use std::fmt;

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use savings_core::ProjectionSeries;
use tracing::debug;

use crate::utils::{abbreviate_tick, format_usd_whole};

const DEPOSIT_GLYPH: char = '█';
const INTEREST_GLYPH: char = '░';

/// One stacked dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<Decimal>,
}

/// Everything a renderer needs to draw the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    /// Category labels, one per year (`"0"`, `"1"`, ...).
    pub labels: Vec<String>,
    pub deposits: ChartSeries,
    pub interest: ChartSeries,
    pub x_title: String,
    pub y_title: String,
}

impl ChartData {
    pub fn from_projection(projection: &ProjectionSeries) -> Self {
        Self {
            labels: projection.year_labels(),
            deposits: ChartSeries {
                label: "Total Deposits".to_string(),
                values: projection.cumulative_deposits.clone(),
            },
            interest: ChartSeries {
                label: "Total Interest".to_string(),
                values: projection.cumulative_interest.clone(),
            },
            x_title: "Years".to_string(),
            y_title: "Savings".to_string(),
        }
    }

    /// Hover text for one year, whole dollars.
    pub fn tooltip(
        &self,
        index: usize,
    ) -> Option<String> {
        let label = self.labels.get(index)?;
        let deposits = self.deposits.values.get(index)?;
        let interest = self.interest.values.get(index)?;
        Some(format!(
            "Year: {label} | {}: {} | {}: {}",
            self.deposits.label,
            format_usd_whole(*deposits),
            self.interest.label,
            format_usd_whole(*interest)
        ))
    }
}

/// Draws charts. Implementations replace the previous instance rather than
/// mutating it.
pub trait ChartRenderer {
    type Chart;

    /// Destroys `previous` (if any) and returns a new chart for `data`.
    fn replace(
        &mut self,
        previous: Option<Self::Chart>,
        data: &ChartData,
    ) -> Result<Self::Chart>;
}

/// A rendered terminal chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChart {
    generation: u64,
    lines: Vec<String>,
}

impl TextChart {
    /// How many charts the renderer had produced when this one was drawn.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for TextChart {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Horizontal stacked bars, one row per year.
#[derive(Debug, Clone)]
pub struct TextChartRenderer {
    width: usize,
    generation: u64,
}

impl TextChartRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            generation: 0,
        }
    }

    fn draw(
        &self,
        data: &ChartData,
    ) -> Vec<String> {
        let positive = |value: &Decimal| (*value).max(Decimal::ZERO);
        let peak = data
            .deposits
            .values
            .iter()
            .zip(&data.interest.values)
            .map(|(deposits, interest)| positive(deposits).saturating_add(positive(interest)))
            .max()
            .unwrap_or_default();
        let step = nice_step(peak / Decimal::from(4));
        let axis_max = axis_ceiling(peak, step);

        let label_width = data
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(1)
            .max(data.x_title.chars().count());

        let mut lines = vec![
            format!("{:>label_width$}   {}", "", data.y_title),
            format!(
                "{:>label_width$}   {DEPOSIT_GLYPH} {}   {INTEREST_GLYPH} {}",
                "", data.deposits.label, data.interest.label
            ),
            format!("{:>label_width$} ┐", data.x_title),
        ];

        for (index, label) in data.labels.iter().enumerate() {
            let deposits = data.deposits.values.get(index).map(positive).unwrap_or_default();
            let interest = data.interest.values.get(index).map(positive).unwrap_or_default();
            let deposit_cells = self.cells(deposits, axis_max);
            let interest_cells = self
                .cells(interest, axis_max)
                .min(self.width.saturating_sub(deposit_cells));

            let bar: String = std::iter::repeat_n(DEPOSIT_GLYPH, deposit_cells)
                .chain(std::iter::repeat_n(INTEREST_GLYPH, interest_cells))
                .collect();
            let tooltip = data.tooltip(index).unwrap_or_default();
            lines.push(format!(
                "{label:>label_width$} │{bar:<width$}  {tooltip}",
                width = self.width
            ));
        }

        lines.push(format!(
            "{:>label_width$} └{}",
            "",
            "─".repeat(self.width)
        ));
        lines.push(format!(
            "{:>label_width$}  {}",
            "",
            self.tick_ruler(step, axis_max)
        ));
        lines
    }

    /// Number of bar cells for `value` on an axis ending at `axis_max`.
    fn cells(
        &self,
        value: Decimal,
        axis_max: Decimal,
    ) -> usize {
        if axis_max <= Decimal::ZERO {
            return 0;
        }
        (value / axis_max * Decimal::from(self.width as u64))
            .round()
            .to_usize()
            .unwrap_or(0)
            .min(self.width)
    }

    /// Tick labels placed under their column, skipping any that would overlap.
    fn tick_ruler(
        &self,
        step: Decimal,
        axis_max: Decimal,
    ) -> String {
        let mut ruler: Vec<char> = vec![' '; self.width + 8];
        let mut next_free = 0;
        let mut tick = Decimal::ZERO;

        while tick <= axis_max {
            let column = self.cells(tick, axis_max);
            let text = abbreviate_tick(tick);
            if column >= next_free && column + text.chars().count() <= ruler.len() {
                for (offset, ch) in text.chars().enumerate() {
                    ruler[column + offset] = ch;
                }
                next_free = column + text.chars().count() + 1;
            }
            match tick.checked_add(step) {
                Some(next) if step > Decimal::ZERO => tick = next,
                _ => break,
            }
        }

        ruler.into_iter().collect::<String>().trim_end().to_string()
    }
}

impl Default for TextChartRenderer {
    fn default() -> Self {
        Self::new(48)
    }
}

impl ChartRenderer for TextChartRenderer {
    type Chart = TextChart;

    fn replace(
        &mut self,
        previous: Option<TextChart>,
        data: &ChartData,
    ) -> Result<TextChart> {
        if let Some(previous) = previous {
            debug!(generation = previous.generation, "destroying previous chart");
            drop(previous);
        }

        self.generation += 1;
        let chart = TextChart {
            generation: self.generation,
            lines: self.draw(data),
        };
        debug!(generation = chart.generation, rows = data.labels.len(), "chart rendered");
        Ok(chart)
    }
}

/// Rounds `raw` up to 1, 2 or 5 times a power of ten, never below one dollar.
fn nice_step(raw: Decimal) -> Decimal {
    if raw <= Decimal::ONE {
        return Decimal::ONE;
    }

    let ten = Decimal::TEN;
    let mut magnitude = Decimal::ONE;
    loop {
        match magnitude.checked_mul(ten) {
            Some(next) if next <= raw => magnitude = next,
            _ => break,
        }
    }

    [Decimal::ONE, Decimal::TWO, Decimal::from(5), ten]
        .into_iter()
        .filter_map(|multiple| magnitude.checked_mul(multiple))
        .find(|step| *step >= raw)
        .unwrap_or(raw)
}

/// Smallest multiple of `step` at or above `peak`.
fn axis_ceiling(
    peak: Decimal,
    step: Decimal,
) -> Decimal {
    (peak / step)
        .ceil()
        .checked_mul(step)
        .unwrap_or(peak)
        .max(step)
}
