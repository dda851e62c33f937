//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
