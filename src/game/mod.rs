//! Core game logic: board representation, player tokens, and the game
//! engine with its terminal-status latch.

mod board;
mod state;
mod token;

pub use board::{Board, MoveError};
pub use state::{Game, GameStatus};
pub use token::Token;
