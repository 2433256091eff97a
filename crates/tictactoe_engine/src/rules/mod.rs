//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) for evaluating
//! terminal state. Rules are separated from board storage so the board
//! mutator and the bot can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{is_winner, winner};
