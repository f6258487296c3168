use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use savings_ui::{
    CalculatorApp, Session, TextChartRenderer,
    config::CalculatorConfig,
    logging::{self, LogOptions},
    models::{FormField, SavingsForm},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Savings goal calculator.
///
/// Works out the deposit needed each period to reach a savings goal and
/// charts deposits against interest year by year. Inputs accept loose text
/// such as `$10,000`, `6%` or `10 year`.
#[derive(Debug, Parser)]
struct Cli {
    /// Current balance (e.g. `$10,000`).
    #[arg(long)]
    balance: Option<String>,

    /// Savings goal (e.g. `$50,000`).
    #[arg(long)]
    goal: Option<String>,

    /// Deposit frequency: monthly, fortnightly or weekly.
    #[arg(long)]
    frequency: Option<String>,

    /// Annual interest rate as a percentage (e.g. `6%`).
    #[arg(long)]
    rate: Option<String>,

    /// Saving term in years.
    #[arg(long)]
    term: Option<String>,

    /// Start an interactive session instead of printing once.
    #[arg(long, short)]
    interactive: bool,

    /// Send printed views to this file instead of stdout.
    #[arg(long)]
    print_to: Option<PathBuf>,

    /// TOML file with form defaults and chart settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width of the longest chart bar, in characters.
    #[arg(long)]
    chart_width: Option<usize>,

    /// Log level or filter directive; overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> impl Iterator<Item = (FormField, &str)> {
        [
            (FormField::CurrentBalance, &self.balance),
            (FormField::SavingGoal, &self.goal),
            (FormField::Frequency, &self.frequency),
            (FormField::InterestRate, &self.rate),
            (FormField::SavingTerm, &self.term),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LogOptions {
        level: cli.log_level.as_deref(),
        file: cli.log_file.as_deref(),
    })?;

    let config = CalculatorConfig::load(cli.config.as_deref())?;
    let chart_width = cli.chart_width.unwrap_or(config.chart.width);

    let mut form = SavingsForm::new(config.defaults);
    for (field, value) in cli.overrides() {
        debug!(field = field.command(), value, "command line override");
        form.set(field, value);
    }

    let app = CalculatorApp::new(form, TextChartRenderer::new(chart_width))?;

    let mut printer: Box<dyn Write> = match &cli.print_to {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("cannot create print file '{}'", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    if cli.interactive {
        Session::new(app, io::stdin().lock(), io::stdout(), printer).run()
    } else {
        app.print(&mut printer)
    }
}
