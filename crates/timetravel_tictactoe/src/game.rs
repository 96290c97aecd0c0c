//! Game state and its transitions.
//!
//! [`GameState`] is an immutable value. Every transition borrows the current
//! state and returns a fresh one, so earlier states (and the snapshots they
//! hold) are never touched. [`GameState::play`] and [`GameState::jump`] report
//! why an event was rejected; [`GameState::apply`] is the total reducer that
//! frontends call, turning every rejection into a no-op.

use crate::contracts::{ClickContract, Contract, JumpContract};
use crate::history::{History, HistoryEntry};
use crate::rules::{self, WinningLine};
use crate::{Board, GameEvent, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// Status line derived from the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The viewed board has a completed line.
    Winner(Player),
    /// No winner yet; this player moves next.
    NextPlayer(Player),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Complete game state: history, the step being viewed, and list order.
///
/// The player to move is not stored. It is derived from the parity of
/// `step_number`, so clicks and jumps can never disagree about whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step_number: usize,
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game: one empty snapshot, X to move, ascending list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the move list in the given order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            sort_order,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Display order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Snapshot being viewed.
    pub fn current(&self) -> &HistoryEntry {
        // step_number < history.len() is upheld by every transition.
        &self.history.entries()[self.step_number]
    }

    /// Board being viewed.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player who moves next from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Completed line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.board())
    }

    /// Owner of the completed line on the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.board())
    }

    /// Status derived from the viewed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// History after the viewed step is discarded before the new snapshot is
    /// appended, and the view moves to the new snapshot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed board is already won.
    /// - [`MoveError::SquareOccupied`] if `pos` is filled.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn play(&self, pos: Position) -> Result<Self, MoveError> {
        ClickContract::pre(self, &pos)?;

        let board = self.board().with(pos, Square::Occupied(self.next_player()));
        let history = self
            .history
            .branch(self.step_number, HistoryEntry::new(pos, board));
        let next = Self {
            step_number: history.len() - 1,
            history,
            sort_order: self.sort_order,
        };

        ClickContract::post(self, &next)?;
        info!(step = next.step_number, "Move played");
        Ok(next)
    }

    /// Moves the view to `step`, keeping the whole history.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] if `step` is not in the history.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump(&self, step: usize) -> Result<Self, MoveError> {
        JumpContract::pre(self, &step)?;

        let next = Self {
            history: self.history.clone(),
            step_number: step,
            sort_order: self.sort_order,
        };

        JumpContract::post(self, &next)?;
        info!(to = step, "Jumped");
        Ok(next)
    }

    /// Sets the move-list order. History and view are unchanged.
    #[instrument(skip(self))]
    pub fn sort_history(&self, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..self.clone()
        }
    }

    /// Applies an event, returning the next state.
    ///
    /// Rejected clicks and jumps leave the state unchanged.
    #[instrument(skip(self))]
    pub fn apply(&self, event: GameEvent) -> Self {
        let result = match event {
            GameEvent::Click(pos) => self.play(pos),
            GameEvent::Jump(step) => self.jump(step),
            GameEvent::SortHistory(order) => Ok(self.sort_history(order)),
        };
        result.unwrap_or_else(|e| {
            debug!(error = %e, "Event ignored");
            self.clone()
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(positions: &[Position]) -> GameState {
        positions
            .iter()
            .fold(GameState::new(), |state, &pos| state.apply(GameEvent::Click(pos)))
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert_eq!(state.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_click_alternates_players() {
        let state = play_all(&[Position::Center, Position::TopLeft]);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(state.step_number(), 2);
        assert!(state.x_is_next());
    }

    #[test]
    fn test_play_reports_occupied_square() {
        let state = play_all(&[Position::Center]);
        assert_eq!(
            state.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_play_reports_game_over() {
        let state = play_all(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        assert_eq!(state.play(Position::BottomRight), Err(MoveError::GameOver(Player::X)));
    }

    #[test]
    fn test_jump_derives_turn_from_parity() {
        let state = play_all(&[Position::Center, Position::TopLeft, Position::TopRight]);
        assert!(!state.x_is_next());
        let rewound = state.apply(GameEvent::Jump(2));
        assert!(rewound.x_is_next());
        assert_eq!(rewound.history(), state.history());
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let state = play_all(&[Position::Center]);
        assert_eq!(
            state.jump(5),
            Err(MoveError::StepOutOfRange { step: 5, len: 2 })
        );
        assert_eq!(state.apply(GameEvent::Jump(5)), state);
    }

    #[test]
    fn test_sort_history_keeps_game() {
        let state = play_all(&[Position::Center]);
        let sorted = state.apply(GameEvent::SortHistory(SortOrder::Descending));
        assert_eq!(sorted.sort_order(), SortOrder::Descending);
        assert_eq!(sorted.history(), state.history());
        assert_eq!(sorted.step_number(), state.step_number());
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("descending".parse::<SortOrder>().ok(), Some(SortOrder::Descending));
        assert_eq!("Ascending".parse::<SortOrder>().ok(), Some(SortOrder::Ascending));
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Descending.to_string(), "descending");
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
    }
}
