//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type WinningLine = [Position; 3];

/// The eight lines, checked in this order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Returns `Some(line)` for the first line in [`LINES`] whose three squares
/// are occupied by the same player, `None` otherwise.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the player owning the first completed line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line[0]).mark())
}
