use crate::config::GameConfig;
use crate::error::ConfigError;

use super::board::{Board, MoveError};
use super::Token;

/// Current standing of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WonBy(Token),
    Draw,
}

/// The game engine: owns the grid, the drop operation, and win/draw
/// evaluation. Mutated only through [`Game::drop_token`]; the driver
/// alternates players and reads [`Game::status`] after each move.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    connect: usize,
    last_move: Option<(usize, usize)>,
    /// Terminal latch, set once by the drop that ended the game.
    /// Never holds `InProgress`.
    outcome: Option<GameStatus>,
}

impl Game {
    /// Create a game from a validated configuration: empty board, no move
    /// made yet.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game {
            board: Board::new(config.rows, config.columns),
            connect: config.connect,
            last_move: None,
            outcome: None,
        })
    }

    /// Get reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run length required to win.
    pub fn connect(&self) -> usize {
        self.connect
    }

    /// (row, column) of the most recent successful drop.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Check if the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full); empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop a token in a column. Returns `false` with the board unchanged
    /// when the column is out of range or full, or when the game is already
    /// over; otherwise places the token, records the move, and updates the
    /// terminal latch.
    pub fn drop_token(&mut self, token: Token, column: usize) -> bool {
        if self.is_over() {
            return false;
        }

        let row = match self.board.drop_token(column, token) {
            Ok(row) => row,
            Err(MoveError::InvalidColumn) | Err(MoveError::ColumnFull) => return false,
        };
        self.last_move = Some((row, column));

        if self.board.check_win(row, column, self.connect) {
            self.outcome = Some(GameStatus::WonBy(token));
        } else if self.board.is_full() {
            self.outcome = Some(GameStatus::Draw);
        }

        true
    }

    /// Current status. Terminal results are latched at the drop that
    /// produced them, so repeated calls always agree.
    pub fn status(&self) -> GameStatus {
        self.outcome.unwrap_or(GameStatus::InProgress)
    }

    /// Text snapshot of the board, for display only.
    pub fn render(&self) -> String {
        self.board.to_string()
    }
}
