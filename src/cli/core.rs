//! Line dispatch, error reporting, and shell context helpers.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Config, ConfigManager};
use crate::errors::{ConfigError, LedgerError, ParseError};
use crate::ledger::Ledger;
use crate::parser::{registry, Outcome, Parser};

use super::io as cli_io;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// A recoverable failure of a single input line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// A failure that ends the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        Ok(Self::with_config(mode, config))
    }

    pub fn with_config(mode: CliMode, config: Config) -> Self {
        cli_io::apply_config(&config);
        if mode == CliMode::Script {
            colored::control::set_override(false);
        }
        ShellContext {
            mode,
            parser: Parser::new(),
            ledger: Ledger::new(),
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn prompt(&self) -> String {
        self.config.prompt.clone()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        registry().names().collect()
    }

    /// Parses and executes one line without printing anything.
    pub fn run_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        self.last_command = Some(line.trim().to_string());
        let command = self.parser.parse(line)?;
        debug!(?command, "executing command");
        let outcome = command.execute(&mut self.ledger)?;
        if outcome == Outcome::Exit {
            self.running = false;
        }
        Ok(outcome)
    }

    pub(crate) fn handle_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        match self.run_line(line)? {
            Outcome::Output(lines) => {
                cli_io::print_lines(&lines);
                Ok(LoopControl::Continue)
            }
            Outcome::Exit => {
                cli_io::print_success("Bye! May your savings keep growing.");
                Ok(LoopControl::Exit)
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit shell?")?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        warn!(error = %err, line = ?self.last_command, "command failed");
        match err {
            CommandError::Parse(ParseError::UnknownCommand { input, suggestion }) => {
                cli_io::print_warning(format!(
                    "Unknown command `{}`. Type `help` to see available commands.",
                    input
                ));
                if let Some(best) = suggestion {
                    cli_io::print_hint(format!("Did you mean `{}`?", best));
                }
            }
            CommandError::Parse(ParseError::EmptyInput) => {}
            CommandError::Parse(other) => {
                cli_io::print_error(&other);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(other) => cli_io::print_error(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_context() -> ShellContext {
        ShellContext::with_config(CliMode::Script, Config::default())
    }

    fn process_script(lines: &[&str]) -> ShellContext {
        let mut context = script_context();
        for line in lines {
            if !context.running {
                break;
            }
            if let Err(err) = context.run_line(line) {
                context.report_error(err);
            }
        }
        context
    }

    #[test]
    fn add_then_view_renders_the_entry() {
        let mut context = script_context();
        context
            .run_line("addIncome pocket money /amt 200 /date 10/10/2023")
            .unwrap();
        let outcome = context.run_line("viewIncomes").unwrap();
        assert_eq!(
            outcome,
            Outcome::Output(vec![
                "The current sum of all your incomes amounts to: S$ 200.0".into(),
                "  1. + S$ 200.0: pocket money (date: 2023-10-10, One time)".into(),
            ])
        );
    }

    #[test]
    fn errors_do_not_stop_the_script() {
        let context = process_script(&[
            "addExpense lunch /amt 8",
            "deleteExpense 4",
            "deleteExpense abc",
            "bogus",
            "addExpense bus /amt 2",
        ]);
        assert_eq!(context.ledger().expenses.len(), 2);
        assert!(context.running);
    }

    #[test]
    fn exit_stops_processing() {
        let context = process_script(&["exit", "addIncome gift /amt 5"]);
        assert!(!context.running);
        assert!(context.ledger().incomes.is_empty());
        assert_eq!(context.last_command.as_deref(), Some("exit"));
    }

    #[test]
    fn parse_errors_surface_as_command_errors() {
        let mut context = script_context();
        let err = context.run_line("deleteIncome abc").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Parse(ParseError::InvalidIndex(ref raw)) if raw == "abc"
        ));

        let err = context.run_line("deleteIncome 0").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Ledger(LedgerError::MissingTransaction(0))
        ));
    }

    #[test]
    fn status_reports_transaction_count() {
        let context = process_script(&["addIncome gift /amt 5", "addExpense tea /amt 1"]);
        assert!(context.status().contains("transactions: 2"));
    }
}
