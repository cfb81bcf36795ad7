//! Error types for the Till CLI.

use std::path::PathBuf;

use till_core::CoreError;

use crate::config::ConfigError;

/// Everything that can end a CLI run.
///
/// The `Display` text is what the cashier sees on stderr.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid {field}: '{input}' is not a number")]
    InvalidNumber { field: String, input: String },

    #[error("No {0} entered")]
    MissingInput(String),

    #[error("Could not read stock file {}: {source}", path.display())]
    StockFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stock file {}: {source}", path.display())]
    StockFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
