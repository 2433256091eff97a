//! Pure tic-tac-toe game logic: board storage, win and tie rules, a
//! turn state machine, and a heuristic bot opponent.
//!
//! Rendering, input mapping, and menu flow are left to callers. The
//! orchestration layer translates device events into `(row, col)`
//! pairs, feeds them through [`Board::apply_move`] (or [`Game::play`]),
//! and queries the board for a winner after every successful move. Bot
//! moves go through exactly the same path:
//!
//! ```
//! use tictactoe_engine::{Board, Bot, Player};
//!
//! let mut board = Board::new(3);
//! board.apply_move(0, 0)?; // X opens in the corner
//!
//! let bot = Bot::new(Player::O);
//! let reply = bot.choose_move(&board).expect("open cells remain");
//! board.apply_move(reply.row, reply.col)?;
//!
//! assert_eq!(board.current_turn(), Player::X);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod bot;
mod game;
pub mod invariants;
mod lines;
pub mod rules;
mod types;

pub use board::{Board, MoveError};
pub use bot::Bot;
pub use game::{Game, Score, Status};
pub use types::{Coord, Outcome, Player, Square};
