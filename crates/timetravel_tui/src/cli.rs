//! Command-line interface for the terminal frontend.

use clap::Parser;
use std::path::PathBuf;
use timetravel_tictactoe::SortOrder;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel-tui")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial move-list order (ascending or descending)
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// File to write logs to (the terminal itself is used by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
