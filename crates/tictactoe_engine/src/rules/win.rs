//! Win detection logic.

use crate::board::Board;
use crate::lines;
use crate::types::{Player, Square};
use strum::IntoEnumIterator;

/// Checks if `player` holds every cell of some winning line.
///
/// A line containing an empty cell or a mix of marks never counts.
pub fn is_winner(board: &Board, player: Player) -> bool {
    lines::for_size(board.size())
        .iter()
        .any(|line| line.iter().all(|&c| board.at(c) == Square::Occupied(player)))
}

/// Returns the winner, checking X before O.
///
/// Under the `apply_move` discipline at most one player can have a
/// complete line, so the scan order is observable only for boards
/// built outside that contract.
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| is_winner(board, player))
}
