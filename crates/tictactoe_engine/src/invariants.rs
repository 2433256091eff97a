//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees; the board debug-asserts them
//! after every successful move.

use crate::board::Board;
use crate::types::{Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

fn mark_counts(board: &Board) -> (usize, usize) {
    let x = board
        .iter()
        .filter(|s| *s == Square::Occupied(Player::X))
        .count();
    let o = board
        .iter()
        .filter(|s| *s == Square::Occupied(Player::O))
        .count();
    (x, o)
}

/// Invariant: X leads O by zero or one mark.
///
/// X always moves first and turns strictly alternate, so any other
/// count means a cell was written outside the move contract.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let (x, o) = mark_counts(board);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

/// Invariant: the side to move matches the mark parity.
///
/// Equal counts mean X moves next; X one ahead means O moves next.
pub struct TurnParity;

impl Invariant<Board> for TurnParity {
    fn holds(board: &Board) -> bool {
        let (x, o) = mark_counts(board);
        let expected = if x == o { Player::X } else { Player::O };
        let valid = board.current_turn() == expected;
        if !valid {
            warn!(x, o, turn = %board.current_turn(), "turn parity violated");
        }
        valid
    }

    fn description() -> &'static str {
        "side to move matches mark parity"
    }
}

/// Asserts the board invariants (debug builds only).
pub(crate) fn assert_board(board: &Board) {
    debug_assert!(BalancedMarks::holds(board), "{}", BalancedMarks::description());
    debug_assert!(TurnParity::holds(board), "{}", TurnParity::description());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_invariants_hold_on_empty_board() {
        let board = Board::new(3);
        assert!(BalancedMarks::holds(&board));
        assert!(TurnParity::holds(&board));
    }

    #[test]
    fn test_invariants_hold_through_legal_play() {
        let mut board = Board::new(3);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 1), (2, 2)] {
            board.apply_move(row, col).unwrap();
            assert!(BalancedMarks::holds(&board));
            assert!(TurnParity::holds(&board));
        }
    }

    #[test]
    fn test_balance_detects_corruption() {
        let mut board = Board::new(3);
        board.set(Coord::new(0, 0), Square::Occupied(Player::O));
        board.set(Coord::new(0, 1), Square::Occupied(Player::O));
        assert!(!BalancedMarks::holds(&board));
    }

    #[test]
    fn test_parity_detects_stale_turn() {
        let mut board = Board::new(3);
        board.set(Coord::new(1, 1), Square::Occupied(Player::X));
        // One X on the board but still X to move.
        assert!(BalancedMarks::holds(&board));
        assert!(!TurnParity::holds(&board));
        board.set_turn(Player::O);
        assert!(TurnParity::holds(&board));
    }
}
