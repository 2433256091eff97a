//! Board storage and the single move-application entry point.

use crate::invariants;
use crate::rules;
use crate::types::{Coord, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error from a board operation. Both variants leave the board
/// untouched and are recoverable by the caller; the expected handling
/// for stray input is to ignore it and continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside the grid.
    #[display("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size the request was checked against.
        size: usize,
    },
    /// Target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// A size×size tic-tac-toe board with the side to move.
///
/// Cells are stored row-major and only ever change through
/// [`Board::apply_move`], which keeps the mark counts balanced and the
/// turn alternating. X always moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Square>,
    to_move: Player,
}

impl Board {
    /// Creates an empty board with X to move.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Square::Empty; size * size],
            to_move: Player::X,
        }
    }

    /// Returns the board size (cells per row or column).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the player whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.to_move
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is
    /// outside `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Square, MoveError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the turn flips to the other player and the mark that
    /// was just placed is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside the
    /// grid and [`MoveError::CellOccupied`] when the target already
    /// holds a mark. Neither advances the turn nor changes a cell.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Player, MoveError> {
        let idx = self.index(row, col)?;
        if self.cells[idx] != Square::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        let mover = self.to_move;
        self.cells[idx] = Square::Occupied(mover);
        self.to_move = mover.opponent();
        invariants::assert_board(self);
        Ok(mover)
    }

    /// Checks if `player` holds a complete winning line.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    /// Checks if the board is full.
    ///
    /// A full board only means a tie when no winner exists; callers
    /// must check [`Board::winner_if_any`] first.
    pub fn is_tie(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the winner, scanning X before O.
    pub fn winner_if_any(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// Iterates over the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().copied()
    }

    /// Returns all cells as a row-major slice.
    pub fn squares(&self) -> &[Square] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MoveError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Unchecked cell access for coordinates that come from the shared
    /// line table and are in range by construction.
    pub(crate) fn at(&self, coord: Coord) -> Square {
        self.cells[coord.row * self.size + coord.col]
    }

    /// Test-only backdoor for constructing positions that cannot be
    /// reached through `apply_move` alone.
    #[cfg(test)]
    pub(crate) fn set(&mut self, coord: Coord, square: Square) {
        let idx = coord.row * self.size + coord.col;
        self.cells[idx] = square;
    }

    /// Test-only turn override, paired with [`Board::set`].
    #[cfg(test)]
    pub(crate) fn set_turn(&mut self, player: Player) {
        self.to_move = player;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
                for col in 0..self.size {
                    if col > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "-")?;
                }
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * self.size + col] {
                    Square::Empty => write!(f, " ")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_with_x_to_move() {
        let board = Board::new(3);
        assert_eq!(board.current_turn(), Player::X);
        assert!(board.iter().all(|s| s == Square::Empty));
        assert_eq!(board.iter().count(), 9);
    }

    #[test]
    fn test_turns_alternate_starting_at_x() {
        let mut board = Board::new(3);
        assert_eq!(board.apply_move(0, 0), Ok(Player::X));
        assert_eq!(board.current_turn(), Player::O);
        assert_eq!(board.apply_move(1, 1), Ok(Player::O));
        assert_eq!(board.current_turn(), Player::X);
        assert_eq!(board.apply_move(2, 2), Ok(Player::X));
        assert_eq!(board.current_turn(), Player::O);
    }

    #[test]
    fn test_occupied_cell_rejected_without_side_effect() {
        let mut board = Board::new(3);
        board.apply_move(1, 1).unwrap();
        let snapshot = board.clone();

        let result = board.apply_move(1, 1);
        assert_eq!(
            result,
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new(3);
        assert_eq!(
            board.apply_move(3, 0),
            Err(MoveError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert_eq!(
            board.get(0, 7),
            Err(MoveError::OutOfBounds {
                row: 0,
                col: 7,
                size: 3
            })
        );
        assert_eq!(board.current_turn(), Player::X);
    }

    #[test]
    fn test_get_reflects_applied_moves() {
        let mut board = Board::new(3);
        board.apply_move(0, 2).unwrap();
        assert_eq!(board.get(0, 2), Ok(Square::Occupied(Player::X)));
        assert_eq!(board.get(2, 0), Ok(Square::Empty));
    }

    #[test]
    fn test_iteration_is_row_major() {
        let mut board = Board::new(3);
        board.apply_move(0, 1).unwrap(); // X at index 1
        board.apply_move(2, 0).unwrap(); // O at index 6
        let cells: Vec<Square> = board.iter().collect();
        assert_eq!(cells[1], Square::Occupied(Player::X));
        assert_eq!(cells[6], Square::Occupied(Player::O));
        assert_eq!(cells.len(), 9);
        // Iteration is restartable.
        assert_eq!(board.iter().count(), 9);
    }

    #[test]
    fn test_display_renders_grid() {
        let mut board = Board::new(3);
        board.apply_move(0, 0).unwrap();
        board.apply_move(1, 1).unwrap();
        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Board::new(3);
        board.apply_move(0, 0).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
