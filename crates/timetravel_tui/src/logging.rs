//! Log setup. Output goes to a file so it never tears the drawn screen.

use crate::TuiConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter. Installing twice is not an
/// error; the first subscriber stays.
pub fn init(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_filter())
            .with_context(|| format!("Invalid log filter '{}'", config.log_filter()))?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
