//! Time-travel tic-tac-toe - pure game logic.
//!
//! This crate holds everything the frontends share: the board, win
//! detection, the move history and the reducer that drives it, plus the
//! frontend-independent display tree derived from a game state.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: win detection over the eight fixed lines
//! - **History**: immutable snapshots, one per ply
//! - **Game**: [`GameState`] and its transitions ([`GameEvent`])
//! - **View**: [`render`] turns a state into a [`GameView`]
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameEvent, GameState, Position};
//!
//! let state = GameState::new()
//!     .apply(GameEvent::Click(Position::Center))
//!     .apply(GameEvent::Click(Position::TopLeft));
//! assert_eq!(state.history().len(), 3);
//!
//! let rewound = state.apply(GameEvent::Jump(0));
//! assert_eq!(rewound.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
pub mod view;

pub use action::{GameEvent, MoveError};
pub use game::{GameState, SortOrder, Status};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{WinningLine, winner, winning_line};
pub use types::{Board, Player, Square};
pub use view::{BoardView, GameView, MoveView, SortToggle, SquareView, render};
