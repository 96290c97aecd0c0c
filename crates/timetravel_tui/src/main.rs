//! Terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use timetravel_tui::{Cli, TuiConfig, logging, run};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    logging::init(&config)?;

    info!(log_file = %config.log_file().display(), "Starting timetravel-tui");
    run(&config)
}
