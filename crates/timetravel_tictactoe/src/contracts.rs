//! Contract-based validation for game transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} transition {Q}. Preconditions decide whether an event is a legal
//! transition or a no-op; postconditions re-check the game invariants on
//! the state the transition produced.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{GameState, MoveError, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board being viewed has no completed line.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] when someone already won.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.winner() {
            Some(player) => Err(MoveError::GameOver(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: the clicked square is empty on the board being viewed.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a filled square.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: the jump target exists in the history.
pub struct StepInHistory;

impl StepInHistory {
    /// Fails with [`MoveError::StepOutOfRange`] past the end of the history.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), MoveError> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(MoveError::StepOutOfRange { step, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

fn invariants_hold(after: &GameState) -> Result<(), MoveError> {
    GameInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for clicking a square.
///
/// Preconditions:
/// - No winning line on the viewed board
/// - Square must be empty
///
/// Postconditions:
/// - All [`GameInvariants`] hold
pub struct ClickContract;

impl Contract<GameState, Position> for ClickContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        NoWinnerYet::check(state)?;
        SquareIsEmpty::check(*pos, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        invariants_hold(after)
    }
}

/// Contract for jumping to a step.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(state: &GameState, step: &usize) -> Result<(), MoveError> {
        StepInHistory::check(*step, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if before.history() != after.history() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: jump rewrote the history".to_string(),
            ));
        }
        invariants_hold(after)
    }
}
