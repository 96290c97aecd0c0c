//! Terminal frontend for time-travel tic-tac-toe.
//!
//! The terminal plays the same game as the browser: the [`App`] wraps a
//! [`GameState`](timetravel_tictactoe::GameState), turns key presses into
//! [`GameEvent`](timetravel_tictactoe::GameEvent)s and draws the derived
//! [`GameView`](timetravel_tictactoe::GameView) with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod logging;
mod terminal;
pub mod ui;

pub use app::{App, Focus, Transition};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use terminal::run;
