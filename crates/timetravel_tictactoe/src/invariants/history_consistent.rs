//! History consistency invariant: consecutive snapshots differ by one ply.

use super::Invariant;
use crate::{GameState, Player, Position, Square};

/// Invariant: every entry records the move that produced it.
///
/// Entry 0 selects nothing. Every later entry n selects a square that was
/// empty in entry n-1 and now holds the mark of the player to move at step
/// n-1. No other square changes.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();
        let Some(first) = entries.first() else {
            return false;
        };
        if first.selected().is_some() {
            return false;
        }

        entries.windows(2).enumerate().all(|(step, pair)| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(selected) = *pair[1].selected() else {
                return false;
            };
            let mark = Square::Occupied(Player::for_step(step));
            Position::ALL.iter().all(|&pos| {
                if pos == selected {
                    before.get(pos) == Square::Empty && after.get(pos) == mark
                } else {
                    before.get(pos) == after.get(pos)
                }
            })
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly the selected square with the mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEvent;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let state = [Position::TopLeft, Position::Center, Position::TopRight, Position::BottomLeft]
            .into_iter()
            .fold(GameState::new(), |s, pos| s.apply(GameEvent::Click(pos)));
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut state = GameState::new().apply(GameEvent::Click(Position::Center));
        state.history.entries[1]
            .board
            .set(Position::Center, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_selection_mismatch_violates() {
        let mut state = GameState::new().apply(GameEvent::Click(Position::Center));
        state.history.entries[1].selected = Some(Position::TopLeft);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
