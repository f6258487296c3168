//! Line-oriented interactive session.
//!
//! Each input line is one user action. Editing a field or resetting triggers
//! exactly one recompute-and-render pass, after which the view is redrawn.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::app::CalculatorApp;
use crate::chart::ChartRenderer;
use crate::components::status_bar::{build_status_bar, hints};
use crate::logging;
use crate::models::FormField;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Reset,
    Print,
    Assumptions,
    Close,
    Show,
    LogLevel(String),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        if let Some(field) = FormField::from_command(word) {
            return Some(Self::Set(field, rest.to_string()));
        }
        Some(match word.to_ascii_lowercase().as_str() {
            "reset" => Self::Reset,
            "print" => Self::Print,
            "assumptions" => Self::Assumptions,
            "close" => Self::Close,
            "show" => Self::Show,
            "log" => Self::LogLevel(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(word.to_string()),
        })
    }
}

/// Drives a [`CalculatorApp`] from `input`, drawing to `output`.
pub struct Session<I, O, P, R>
where
    R: ChartRenderer,
{
    app: CalculatorApp<R>,
    input: I,
    output: O,
    printer: P,
}

impl<I, O, P, R> Session<I, O, P, R>
where
    I: BufRead,
    O: Write,
    P: Write,
    R: ChartRenderer,
    R::Chart: fmt::Display,
{
    pub fn new(
        app: CalculatorApp<R>,
        input: I,
        output: O,
        printer: P,
    ) -> Self {
        Self {
            app,
            input,
            output,
            printer,
        }
    }

    /// Processes commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("interactive session started");
        self.redraw()?;

        let mut line = String::new();
        loop {
            line.clear();
            write!(self.output, "> ").context("failed to write prompt")?;
            self.output.flush().context("failed to flush prompt")?;
            if self.input.read_line(&mut line).context("failed to read command")? == 0 {
                break;
            }
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            debug!(?command, "session command");
            if !self.handle(command)? {
                break;
            }
        }

        info!("interactive session ended");
        Ok(())
    }

    /// Applies one command. Returns `false` when the session should end.
    pub fn handle(
        &mut self,
        command: Command,
    ) -> Result<bool> {
        // Any action other than the overlay's own commands dismisses it.
        if !matches!(command, Command::Assumptions | Command::Close) {
            self.app.close_assumptions();
        }

        match command {
            Command::Set(field, value) => {
                self.app.set_field(field, &value)?;
                self.redraw()?;
            }
            Command::Reset => {
                self.app.reset()?;
                self.redraw()?;
            }
            Command::Print => self.app.print(&mut self.printer)?,
            Command::Assumptions => {
                self.app.open_assumptions();
                self.redraw()?;
            }
            Command::Close => {
                self.app.close_assumptions();
                self.redraw()?;
            }
            Command::Show => self.redraw()?,
            Command::LogLevel(level) => {
                let message = match logging::set_log_level(&level) {
                    Ok(()) => format!("Log level set to '{level}'"),
                    Err(e) => format!("Log level unchanged: {e}"),
                };
                writeln!(self.output, "{message}").context("failed to write output")?;
            }
            Command::Help => self.write_help()?,
            Command::Quit => return Ok(false),
            Command::Unknown(word) => {
                writeln!(self.output, "Unknown command '{word}'. Type `help` for commands.")
                    .context("failed to write output")?;
            }
        }
        Ok(true)
    }

    pub fn app(&self) -> &CalculatorApp<R> {
        &self.app
    }

    /// Consumes the session, returning the output and print sinks.
    pub fn into_sinks(self) -> (O, P) {
        (self.output, self.printer)
    }

    fn redraw(&mut self) -> Result<()> {
        write!(self.output, "{}", self.app.view()).context("failed to draw view")?;
        writeln!(self.output, "{}", build_status_bar(hints::ALL)).context("failed to draw view")
    }

    fn write_help(&mut self) -> Result<()> {
        writeln!(self.output, "Fields:").context("failed to write help")?;
        for field in FormField::all() {
            writeln!(self.output, "  {:<10} {}", field.command(), field.label())
                .context("failed to write help")?;
        }
        writeln!(
            self.output,
            "Actions: reset, print, assumptions, close, show, log <level>, help, quit"
        )
        .context("failed to write help")
    }
}
