//! Configuration for the terminal frontend.

use crate::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetravel_tictactoe::SortOrder;
use tracing::{debug, info, instrument};

/// Settings loaded from a TOML file; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Initial order of the move list.
    #[serde(default)]
    sort_order: SortOrder,

    /// File receiving log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(sort_order = %config.sort_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line flags on top of the file settings.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(sort_order) = cli.sort {
            self.sort_order = sort_order;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
