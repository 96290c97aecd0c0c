//! Monotonic fill invariant: snapshot n has exactly n marks.

use super::Invariant;
use crate::GameState;

/// Invariant: the entry at index n has exactly n occupied squares.
///
/// Each ply adds one mark and nothing is ever erased, so the fill count
/// grows by exactly one per entry.
pub struct MonotonicFillInvariant;

impl Invariant<GameState> for MonotonicFillInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .all(|(step, entry)| entry.board().occupied() == step)
    }

    fn description() -> &'static str {
        "Snapshot n has exactly n occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEvent, Player, Position, Square};

    #[test]
    fn test_full_game_holds() {
        let state = [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]
        .into_iter()
        .fold(GameState::new(), |s, pos| s.apply(GameEvent::Click(pos)));
        assert_eq!(state.history().len(), 10);
        assert!(MonotonicFillInvariant::holds(&state));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut state = GameState::new().apply(GameEvent::Click(Position::Center));
        state.history.entries[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!MonotonicFillInvariant::holds(&state));
    }
}
