//! Interactive single-form CLI over the budget editor.

pub mod io;
pub mod output;
pub mod shell;

use thiserror::Error;

use crate::errors::{ConfigError, ExportError};

/// Failures that abort a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
