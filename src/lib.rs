#![doc(test(attr(deny(warnings))))]

//! Orcamento Core offers the quote-editing and document-export primitives
//! that power the Big Refrigeração budgeting CLI.

pub mod budget;
pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod money;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("orcamento_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Orcamento Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
