use thiserror::Error;

/// Validation failures raised by the budget editor.
///
/// The display strings double as the inline messages shown to the operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("fill in the service name and a valid amount")]
    MissingServiceFields,
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
    #[error("fill in all fields before finalizing")]
    IncompleteBudget,
    #[error("no entry at position {0}")]
    NoSuchEntry(usize),
}

/// Failures raised while rendering or writing the exported document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("there are no budgets to export")]
    NoBudgets,
    #[error("document rendering failed: {0}")]
    Render(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type that captures config load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
