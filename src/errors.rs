use thiserror::Error;

/// Errors raised while turning an input line into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Nothing to do here. Type `help` to see available commands.")]
    EmptyInput,
    #[error("Unknown command `{input}`.")]
    UnknownCommand {
        input: String,
        suggestion: Option<&'static str>,
    },
    #[error("`{0}` needs more details than that.")]
    MissingContent(String),
    #[error("Missing required field `{0}`.")]
    MissingField(String),
    #[error("An {0} without a description is a transaction without its story.")]
    MissingDescription(&'static str),
    #[error("Please enter a valid amount, `{0}` is not a number.")]
    InvalidAmount(String),
    #[error("Which transaction should go? Give me its index.")]
    MissingIndex,
    #[error("`{0}` is not the kind of number we use for indices.")]
    InvalidIndex(String),
    #[error("`{0}` is not a date in DD/MM/YYYY format.")]
    InvalidDate(String),
    #[error("`{0}` is not a known category.")]
    InvalidCategory(String),
    #[error("Not sure what to do with `{0}`. Put it after a flag such as `/desc`.")]
    UnexpectedArgument(String),
}

/// Errors raised by statement lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("No transaction at index {0}.")]
    MissingTransaction(i64),
    #[error("No transactions match the given filters.")]
    NoMatchingTransactions,
}

/// Error type for configuration loading and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
