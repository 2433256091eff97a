//! Heuristic move selection.
//!
//! Priority order: complete an own line, block the opponent's line,
//! then fall back to a static positional preference. One ply only; the
//! fallback is deliberately not optimal play and can lose to a perfect
//! adversary.

use crate::board::Board;
use crate::lines;
use crate::types::{Coord, Player, Square};
use tracing::instrument;

/// Positional fallback for the classic board: the four corners, the
/// center, then the edge midpoints.
const PREFERRED_3X3: [Coord; 9] = [
    Coord { row: 0, col: 0 },
    Coord { row: 0, col: 2 },
    Coord { row: 2, col: 0 },
    Coord { row: 2, col: 2 },
    Coord { row: 1, col: 1 },
    Coord { row: 0, col: 1 },
    Coord { row: 1, col: 0 },
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: 1 },
];

/// Heuristic opponent playing a fixed symbol.
///
/// The bot is stateless: [`Bot::choose_move`] is a pure function of
/// the board, and applying the chosen cell through
/// [`Board::apply_move`] stays the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bot {
    player: Player,
}

impl Bot {
    /// Creates a bot playing `player`.
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    /// Returns the symbol this bot plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Picks the next cell for this bot, or `None` when it is not the
    /// bot's turn or no empty cell remains.
    #[instrument(skip(self, board), fields(player = %self.player))]
    pub fn choose_move(&self, board: &Board) -> Option<Coord> {
        if board.current_turn() != self.player {
            return None;
        }
        open_line_cell(board, self.player)
            .or_else(|| open_line_cell(board, self.player.opponent()))
            .or_else(|| preferred_cell(board))
    }
}

/// Finds the empty cell completing a line where `player` already holds
/// every other cell. Lines are scanned in the shared table order
/// (rows, then columns, then diagonals), so simultaneous threats
/// resolve to the first line.
fn open_line_cell(board: &Board, player: Player) -> Option<Coord> {
    for line in lines::for_size(board.size()) {
        let mut own = 0;
        let mut empty = 0;
        let mut open_at = None;
        for &coord in line.iter() {
            match board.at(coord) {
                Square::Empty => {
                    empty += 1;
                    open_at = Some(coord);
                }
                Square::Occupied(p) if p == player => own += 1,
                Square::Occupied(_) => {}
            }
        }
        if own == line.len() - 1 && empty == 1 {
            return open_at;
        }
    }
    None
}

fn preferred_cell(board: &Board) -> Option<Coord> {
    if board.size() == 3 {
        PREFERRED_3X3
            .iter()
            .copied()
            .find(|&c| board.at(c) == Square::Empty)
    } else {
        // The preference list is tuned for 3x3; elsewhere take the
        // first open cell in row-major order.
        board
            .iter()
            .position(|s| s == Square::Empty)
            .map(|idx| Coord::new(idx / board.size(), idx % board.size()))
    }
}
