//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage and from the history so every frontend derives the same result
//! from the same snapshot.

pub mod win;

pub use win::{LINES, WinningLine, winner, winning_line};
