use crate::{config::Config, ledger::Ledger, parser::Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a running shell owns: the session ledger, the parser, and the
/// loaded configuration.
pub struct ShellContext {
    pub mode: CliMode,
    pub parser: Parser,
    pub ledger: Ledger,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, transactions: {} }}",
            self.running,
            self.last_command,
            self.ledger.transaction_count()
        )
    }
}
