use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

/// Print every rendered line of a command result.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        output::info(line);
    }
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str) -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
}

/// Push the output-related config switches into the output helpers.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences {
        screen_reader_mode: config.screen_reader_mode,
        high_contrast_mode: config.high_contrast_mode,
        quiet_mode: config.quiet_mode,
    });
}
