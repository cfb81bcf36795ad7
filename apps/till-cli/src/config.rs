//! Till CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable               | Default | Meaning                                   |
//! |------------------------|---------|-------------------------------------------|
//! | `TILL_LOG`             | `info`  | Log filter when `RUST_LOG` is unset       |
//! | `TILL_STOCK_FILE`      | (none)  | JSON file with the opening register stock |
//! | `TILL_UNLIMITED_STOCK` | `false` | Ignore stock, assume every coin available |
//! | `TILL_OUTPUT`          | `text`  | `text` or `json`                          |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable receipt
    #[default]
    Text,

    /// Pretty-printed JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("TILL_OUTPUT".to_string())),
        }
    }
}

/// Till CLI configuration.
#[derive(Debug, Clone)]
pub struct TillConfig {
    /// Log filter directive used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Opening stock file (JSON object of label to count)
    pub stock_file: Option<PathBuf>,

    /// Treat the register as holding unlimited bills and coins
    pub unlimited_stock: bool,

    /// Output format
    pub output: OutputFormat,
}

impl Default for TillConfig {
    fn default() -> Self {
        TillConfig {
            log_filter: "info".to_string(),
            stock_file: None,
            unlimited_stock: false,
            output: OutputFormat::Text,
        }
    }
}

impl TillConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TillConfig::default();

        let config = TillConfig {
            log_filter: lookup("TILL_LOG").unwrap_or(defaults.log_filter),

            stock_file: lookup("TILL_STOCK_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),

            unlimited_stock: lookup("TILL_UNLIMITED_STOCK")
                .map(|value| parse_bool("TILL_UNLIMITED_STOCK", &value))
                .transpose()?
                .unwrap_or(defaults.unlimited_stock),

            output: lookup("TILL_OUTPUT")
                .map(|value| value.parse())
                .transpose()?
                .unwrap_or(defaults.output),
        };

        // A stock file makes no sense when stock is ignored
        if config.unlimited_stock && config.stock_file.is_some() {
            return Err(ConfigError::Conflict(
                "TILL_STOCK_FILE cannot be combined with TILL_UNLIMITED_STOCK".to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Conflicting configuration: {0}")]
    Conflict(String),
}
