//! Tie detection logic.

use crate::board::Board;
use crate::types::Square;

/// Checks if the board is full (no empty cell remains).
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|s| s != Square::Empty)
}

/// Checks if the game is a draw: full board and no winner.
///
/// This bundles the ordering contract for callers that do not need the
/// winner itself: a full board whose last move completed a line is a
/// win, never a tie.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::winner(board).is_none()
}
