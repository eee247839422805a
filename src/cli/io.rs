use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Pushes display preferences from the loaded configuration into the output helpers.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences::from(config));
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt the user for free-form text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompts until `parse` accepts the answer, warning about each rejected attempt.
pub fn prompt_parsed<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, CommandError>,
) -> Result<T, CommandError> {
    loop {
        let raw = prompt_text(theme, prompt)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => print_warning(format!("{err}. Please try again.")),
        }
    }
}
