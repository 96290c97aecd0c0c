//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timetravel_tictactoe::Position;

/// Moves the board cursor one square with the arrow keys.
///
/// The cursor stops at the edges; other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let target = match key {
        KeyCode::Left => Position::from_coordinates(column.wrapping_sub(1), row),
        KeyCode::Right => Position::from_coordinates(column + 1, row),
        KeyCode::Up => Position::from_coordinates(column, row.wrapping_sub(1)),
        KeyCode::Down => Position::from_coordinates(column, row + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
