use std::fmt;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output;
use crate::cli::CliError;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt for free-form text, pre-filled with `initial` when non-empty.
/// Empty submissions are allowed; field validation is the editor's job.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String, CliError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    input.interact_text().map_err(CliError::from)
}

/// Prompt for a calendar date in ISO form, validated on entry.
pub fn prompt_date(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String, CliError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), &str> {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "Use YYYY-MM-DD format")
        });
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    input
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(CliError::from)
}

/// Let the user pick one entry out of a rendered list.
pub fn select_index(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<usize, CliError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CliError::from)
}
