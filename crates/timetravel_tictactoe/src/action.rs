//! First-class events and errors for the game reducer.
//!
//! Every user interaction becomes a [`GameEvent`]. Events are plain values:
//! frontends construct them from clicks or key presses and hand them to
//! [`GameState::apply`](crate::GameState::apply).

use crate::{Player, Position, SortOrder};
use serde::{Deserialize, Serialize};

/// A user interaction with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A square was clicked.
    Click(Position),
    /// A move-list entry was chosen; jump to that step.
    Jump(usize),
    /// The move list should be shown in the given order.
    SortHistory(SortOrder),
}

/// Why a click or jump could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board shown already has a completed line.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested step is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// A transition produced a state breaking a game invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
