//! Command hints printed under the interactive view.

/// Command hint for the status bar.
pub struct CommandHint {
    pub command: &'static str,
    pub action: &'static str,
}

impl CommandHint {
    pub const fn new(command: &'static str, action: &'static str) -> Self {
        Self { command, action }
    }
}

/// Build a status bar line from a list of command hints.
pub fn build_status_bar(hints: &[CommandHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.command, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Hints for the interactive session.
pub mod hints {
    use super::CommandHint;

    pub const SET: CommandHint = CommandHint::new("<field> <value>", "Edit");
    pub const RESET: CommandHint = CommandHint::new("reset", "Defaults");
    pub const PRINT: CommandHint = CommandHint::new("print", "Print");
    pub const ASSUMPTIONS: CommandHint = CommandHint::new("assumptions", "Info");
    pub const HELP: CommandHint = CommandHint::new("help", "Commands");
    pub const QUIT: CommandHint = CommandHint::new("quit", "Exit");

    pub const ALL: &[CommandHint] = &[SET, RESET, PRINT, ASSUMPTIONS, HELP, QUIT];
}
