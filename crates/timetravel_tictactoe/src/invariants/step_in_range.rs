//! Step range invariant: the viewed step exists in the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `step_number < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Viewed step lies inside the history"
    }
}
