//! Application state and the recompute-and-render pass.

use std::fmt::{self, Write as _};
use std::io::Write;

use anyhow::{Context, Result};
use savings_core::SavingsPlan;
use tracing::{debug, info, warn};

use crate::chart::{ChartData, ChartRenderer};
use crate::components::{AssumptionsOverlay, SavingsReport};
use crate::models::{FormField, SavingsForm};

/// Owns the form, the current results and the chart instance.
///
/// Every edit runs one complete, independent pass: parse the form, solve,
/// project, then replace the chart.
pub struct CalculatorApp<R: ChartRenderer> {
    form: SavingsForm,
    renderer: R,
    chart: Option<R::Chart>,
    report: SavingsReport,
    assumptions: AssumptionsOverlay,
}

impl<R: ChartRenderer> CalculatorApp<R> {
    /// Creates the app and runs the first pass.
    pub fn new(
        form: SavingsForm,
        renderer: R,
    ) -> Result<Self> {
        let frequency = form.frequency();
        let mut app = Self {
            form,
            renderer,
            chart: None,
            report: SavingsReport::Unavailable {
                frequency,
                reason: savings_core::SavingsError::InvalidTerm,
            },
            assumptions: AssumptionsOverlay::default(),
        };
        app.recalculate()?;
        Ok(app)
    }

    /// Recomputes everything from the current form text.
    ///
    /// A calculation failure blanks the results and removes the chart; only
    /// a renderer failure is returned as an error.
    pub fn recalculate(&mut self) -> Result<()> {
        let parameters = self.form.to_parameters();
        debug!(?parameters, "recalculating");

        match SavingsPlan::calculate(&parameters) {
            Ok(result) => {
                let data = ChartData::from_projection(&result.projection);
                let chart = self
                    .renderer
                    .replace(self.chart.take(), &data)
                    .context("failed to render savings chart")?;
                self.chart = Some(chart);
                self.report = SavingsReport::Calculated(Box::new(result));
            }
            Err(reason) => {
                warn!(%reason, ?parameters, "savings plan unavailable");
                self.chart = None;
                self.report = SavingsReport::Unavailable {
                    frequency: parameters.frequency,
                    reason,
                };
            }
        }
        Ok(())
    }

    /// Updates one field and recomputes.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: &str,
    ) -> Result<()> {
        debug!(field = field.command(), value, "field changed");
        self.form.set(field, value);
        self.recalculate()
    }

    /// Restores the default inputs and recomputes.
    pub fn reset(&mut self) -> Result<()> {
        info!("resetting form to defaults");
        self.form.reset();
        self.recalculate()
    }

    pub fn open_assumptions(&mut self) {
        self.assumptions.open();
    }

    pub fn close_assumptions(&mut self) {
        self.assumptions.close();
    }

    pub fn assumptions(&self) -> &AssumptionsOverlay {
        &self.assumptions
    }

    pub fn form(&self) -> &SavingsForm {
        &self.form
    }

    pub fn report(&self) -> &SavingsReport {
        &self.report
    }

    pub fn chart(&self) -> Option<&R::Chart> {
        self.chart.as_ref()
    }
}

impl<R> CalculatorApp<R>
where
    R: ChartRenderer,
    R::Chart: fmt::Display,
{
    /// Full current view: inputs, results, chart and any open overlay.
    pub fn view(&self) -> String {
        let mut view = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(view, "{}", self.form);
        let _ = writeln!(view, "{}", self.report);
        match &self.chart {
            Some(chart) => {
                let _ = write!(view, "{chart}");
            }
            None => {
                let _ = writeln!(view, "(no chart available)");
            }
        }
        if self.assumptions.is_open() {
            let _ = write!(view, "\n{}", self.assumptions);
        }
        view
    }

    /// Sends the current view to `printer`.
    pub fn print<W: Write + ?Sized>(
        &self,
        printer: &mut W,
    ) -> Result<()> {
        info!("printing current view");
        printer
            .write_all(self.view().as_bytes())
            .and_then(|()| printer.flush())
            .context("failed to print current view")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use savings_core::SavingsError;

    use super::*;
    use crate::chart::TextChartRenderer;

    fn app() -> CalculatorApp<TextChartRenderer> {
        CalculatorApp::new(SavingsForm::default(), TextChartRenderer::new(24)).unwrap()
    }

    /// Renderer that records how many previous charts it was handed.
    #[derive(Default)]
    struct CountingRenderer {
        rendered: usize,
        destroyed: usize,
    }

    impl ChartRenderer for CountingRenderer {
        type Chart = usize;

        fn replace(
            &mut self,
            previous: Option<usize>,
            _data: &ChartData,
        ) -> Result<usize> {
            if previous.is_some() {
                self.destroyed += 1;
            }
            self.rendered += 1;
            Ok(self.rendered)
        }
    }

    #[test]
    fn new_runs_initial_pass() {
        let app = app();

        assert!(matches!(app.report(), SavingsReport::Calculated(_)));
        assert_eq!(app.chart().unwrap().generation(), 1);
    }

    #[test]
    fn each_edit_replaces_the_chart() {
        let mut app = CalculatorApp::new(SavingsForm::default(), CountingRenderer::default()).unwrap();

        app.set_field(FormField::SavingGoal, "$60,000").unwrap();
        app.set_field(FormField::Frequency, "weekly").unwrap();

        assert_eq!(app.renderer.rendered, 3);
        assert_eq!(app.renderer.destroyed, 2);
        assert_eq!(app.chart(), Some(&3));
    }

    #[test]
    fn zero_term_blanks_results_and_chart() {
        let mut app = app();

        app.set_field(FormField::SavingTerm, "0").unwrap();

        assert_eq!(
            app.report(),
            &SavingsReport::Unavailable {
                frequency: savings_core::ContributionFrequency::Monthly,
                reason: SavingsError::InvalidTerm,
            }
        );
        assert!(app.chart().is_none());
        assert!(app.view().contains("(no chart available)"));
    }

    #[test]
    fn recovering_from_error_renders_again() {
        let mut app = app();
        app.set_field(FormField::SavingTerm, "").unwrap();

        app.set_field(FormField::SavingTerm, "5").unwrap();

        assert!(app.chart().is_some());
    }

    #[test]
    fn reset_restores_default_result() {
        let mut app = app();
        app.set_field(FormField::CurrentBalance, "0").unwrap();

        app.reset().unwrap();

        match app.report() {
            SavingsReport::Calculated(result) => {
                assert_eq!(result.parameters.current_balance, dec!(10000));
            }
            other => panic!("expected a calculated report, got {other:?}"),
        }
    }

    #[test]
    fn view_shows_overlay_only_when_open() {
        let mut app = app();
        assert!(!app.view().contains("Assumptions"));

        app.open_assumptions();
        assert!(app.view().contains("Assumptions"));

        app.close_assumptions();
        assert!(!app.view().contains("Assumptions"));
    }

    #[test]
    fn print_writes_current_view() {
        let app = app();
        let mut printed = Vec::new();

        app.print(&mut printed).unwrap();

        let text = String::from_utf8(printed).unwrap();
        assert!(text.contains("You need to deposit $193.12 monthly"));
        assert!(text.contains("Year: 10"));
    }
}
