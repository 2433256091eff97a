//! Thin state machine over the board, plus an in-session score tally.

use crate::board::{Board, MoveError};
use crate::bot::Bot;
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are being accepted.
    Running,
    /// Terminal until [`Game::restart`].
    Finished(Outcome),
}

/// Win and tie counts for the current session.
///
/// The tally survives [`Game::restart`]; persisting it across sessions
/// is out of scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
    ties: u32,
}

impl Score {
    /// Rounds won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Rounds won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x += 1,
            Outcome::Winner(Player::O) => self.o += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// A running game: one board, one status, one score tally.
///
/// Every move, human or bot, goes through [`Game::play`], which defers
/// validation to the board contract and checks for a winner strictly
/// before checking for a tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: Status,
    score: Score,
}

impl Game {
    /// Creates a game on the classic 3×3 board.
    pub fn new() -> Self {
        Self::with_size(3)
    }

    /// Creates a game on a size×size board.
    pub fn with_size(size: usize) -> Self {
        Self {
            board: Board::new(size),
            status: Status::Running,
            score: Score::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the session score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Plays the current player's mark at `(row, col)` and returns the
    /// resulting phase.
    ///
    /// A finished game ignores further moves and just reports its
    /// terminal status; board and score stay untouched until
    /// [`Game::restart`].
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the board; the game state is
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Status, MoveError> {
        if matches!(self.status, Status::Finished(_)) {
            return Ok(self.status);
        }
        self.board.apply_move(row, col)?;
        // Winner strictly before tie: a final move that fills the
        // board and completes a line is a win.
        if let Some(winner) = self.board.winner_if_any() {
            self.finish(Outcome::Winner(winner));
        } else if self.board.is_tie() {
            self.finish(Outcome::Tie);
        }
        Ok(self.status)
    }

    /// Asks `bot` for a move and feeds it through [`Game::play`],
    /// exactly as a human move would be fed.
    ///
    /// Does nothing when the bot has no move (game finished, out of
    /// turn, or full board).
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the board.
    pub fn play_bot(&mut self, bot: &Bot) -> Result<Status, MoveError> {
        match bot.choose_move(&self.board) {
            Some(cell) => self.play(cell.row, cell.col),
            None => Ok(self.status),
        }
    }

    /// Resets the board for a fresh round, keeping the score.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new(self.board.size());
        self.status = Status::Running;
    }

    fn finish(&mut self, outcome: Outcome) {
        self.score.record(outcome);
        self.status = Status::Finished(outcome);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
