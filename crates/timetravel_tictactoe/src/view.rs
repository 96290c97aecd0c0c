//! Frontend-independent display tree.
//!
//! [`render`] is a pure function from [`GameState`] to [`GameView`]. Frontends
//! project the view into DOM nodes or terminal widgets without re-deriving any
//! game logic, so the status line, the highlighted squares and the move list
//! read the same everywhere.

use crate::{GameState, Player, Position, SortOrder, Square, Status};
use derive_getters::Getters;
use tracing::instrument;

/// CSS class names shared with the stylesheet.
pub mod classes {
    /// Base class of every square.
    pub const SQUARE: &str = "square";
    /// Added to squares on the winning line.
    pub const WINNER_SQUARE: &str = "winnerSquare";
    /// Full class list of a square on the winning line.
    pub const SQUARE_ON_WINNING_LINE: &str = "square winnerSquare";
    /// Row container of three squares.
    pub const BOARD_ROW: &str = "board-row";
    /// Outer layout container.
    pub const GAME: &str = "game";
    /// Container of the board.
    pub const GAME_BOARD: &str = "game-board";
    /// Container of the status line and move list.
    pub const GAME_INFO: &str = "game-info";
    /// Move-list item of the step being viewed.
    pub const MOVE_SELECTED: &str = "moveSelected";
}

/// One square as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareView {
    position: Position,
    square: Square,
    is_winner: bool,
}

impl SquareView {
    /// Position of this square.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Mark on this square.
    pub fn mark(&self) -> Option<Player> {
        self.square.mark()
    }

    /// True when the square belongs to the winning line.
    pub fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Text to show; blank for an empty square.
    pub fn text(&self) -> &'static str {
        self.square.text()
    }

    /// CSS classes, `winnerSquare` added on top of `square`.
    pub fn class(&self) -> &'static str {
        if self.is_winner {
            classes::SQUARE_ON_WINNING_LINE
        } else {
            classes::SQUARE
        }
    }
}

/// The board as three rows of three squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardView {
    rows: [[SquareView; 3]; 3],
}

impl BoardView {
    /// Rows top to bottom, squares left to right.
    pub fn rows(&self) -> &[[SquareView; 3]; 3] {
        &self.rows
    }

    /// The square at `pos`.
    pub fn square(&self, pos: Position) -> SquareView {
        self.rows[pos.row() - 1][pos.column() - 1]
    }
}

/// One move-list entry.
///
/// `step` is the stable key: it indexes the history regardless of where the
/// entry is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveView {
    step: usize,
    selected: Option<Position>,
    is_current: bool,
}

impl MoveView {
    /// History index this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Square filled by this move; `None` for the game start.
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// True for the step being viewed.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Button label: `"Go to game start"` or `"Go to move #n"`.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// Coordinate text `"(col, row)"` of the filled square.
    pub fn coordinates(&self) -> Option<String> {
        self.selected.map(Position::coordinates)
    }

    /// CSS class of the list item.
    pub fn class(&self) -> Option<&'static str> {
        self.is_current.then_some(classes::MOVE_SELECTED)
    }
}

/// The control flipping the move-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortToggle {
    target: SortOrder,
}

impl SortToggle {
    /// Order the list switches to when the control is used.
    pub fn target(&self) -> SortOrder {
        self.target
    }

    /// Label naming the action, not the current order.
    pub fn label(&self) -> &'static str {
        match self.target {
            SortOrder::Ascending => "Sort ascending",
            SortOrder::Descending => "Sort descending",
        }
    }
}

/// Everything a frontend displays for one state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Status line.
    status: Status,
    /// Board of the viewed step.
    board: BoardView,
    /// Move list in display order.
    moves: Vec<MoveView>,
    /// Sort-order control.
    sort_toggle: SortToggle,
}

/// Derives the display tree for a state.
#[instrument(skip(state), fields(step = state.step_number(), len = state.history().len()))]
pub fn render(state: &GameState) -> GameView {
    let board = state.board();
    let line = state.winning_line();
    let rows = [0, 1, 2].map(|row| {
        [0, 1, 2].map(|column| {
            let position = Position::ALL[row * 3 + column];
            SquareView {
                position,
                square: board.get(position),
                is_winner: line.is_some_and(|line| line.contains(&position)),
            }
        })
    });

    let mut moves: Vec<MoveView> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveView {
            step,
            selected: *entry.selected(),
            is_current: step == state.step_number(),
        })
        .collect();
    if !state.sort_order().is_ascending() {
        moves.reverse();
    }

    GameView {
        status: state.status(),
        board: BoardView { rows },
        moves,
        sort_toggle: SortToggle {
            target: state.sort_order().toggled(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEvent;

    #[test]
    fn test_initial_view() {
        let view = render(&GameState::new());
        assert_eq!(view.status().to_string(), "Next player: X");
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].label(), "Go to game start");
        assert_eq!(view.moves()[0].coordinates(), None);
        assert_eq!(view.moves()[0].class(), Some(classes::MOVE_SELECTED));
        assert_eq!(view.sort_toggle().label(), "Sort descending");
        assert!(
            view.board()
                .rows()
                .iter()
                .flatten()
                .all(|sq| sq.text().is_empty() && sq.class() == classes::SQUARE)
        );
    }

    #[test]
    fn test_winning_square_class_combines_base_classes() {
        assert_eq!(
            classes::SQUARE_ON_WINNING_LINE,
            format!("{} {}", classes::SQUARE, classes::WINNER_SQUARE)
        );
        let won = GameState::new()
            .apply(GameEvent::Click(Position::TopLeft))
            .apply(GameEvent::Click(Position::MiddleLeft))
            .apply(GameEvent::Click(Position::TopCenter))
            .apply(GameEvent::Click(Position::Center))
            .apply(GameEvent::Click(Position::TopRight));
        let view = render(&won);
        let classes_by_row: Vec<&str> = view.board().rows()[0].iter().map(SquareView::class).collect();
        assert_eq!(classes_by_row, vec![classes::SQUARE_ON_WINNING_LINE; 3]);
        assert_eq!(view.board().square(Position::Center).class(), classes::SQUARE);
    }

    #[test]
    fn test_rows_are_row_major() {
        let view = render(&GameState::new());
        let order: Vec<usize> = view
            .board()
            .rows()
            .iter()
            .flatten()
            .map(|sq| sq.position().to_index())
            .collect();
        assert_eq!(order, (0..9).collect::<Vec<_>>());
        assert_eq!(view.board().square(Position::MiddleRight).position(), Position::MiddleRight);
    }

    #[test]
    fn test_descending_reverses_display_only() {
        let state = GameState::new()
            .apply(GameEvent::Click(Position::Center))
            .apply(GameEvent::Click(Position::TopLeft))
            .apply(GameEvent::SortHistory(SortOrder::Descending));
        let view = render(&state);
        let steps: Vec<usize> = view.moves().iter().map(MoveView::step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(view.moves()[0].label(), "Go to move #2");
        assert_eq!(view.moves()[0].coordinates().as_deref(), Some("(1, 1)"));
        assert!(view.moves()[0].is_current());
        assert_eq!(view.sort_toggle().label(), "Sort ascending");
    }
}
