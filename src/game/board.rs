use std::fmt;

use super::Token;

/// The four line directions a winning run can lie on, each scanned in both
/// orientations: horizontal, vertical, and the two diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells, row 0 at the top. `None` is an empty slot.
    cells: Vec<Option<Token>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board. Dimensions are validated by the caller
    /// (`GameConfig::validate`) before a board is built.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<Token> {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col).is_some()
    }

    /// Drop a token in a column, returns the row where it landed.
    pub fn drop_token(&mut self, col: usize, token: Token) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col).is_none() {
                self.cells[row * self.cols + col] = Some(token);
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Check whether the move at (row, col) completed a run of at least
    /// `connect` tokens. Any new run must pass through the placed token, so
    /// scanning outward from it in the four line directions suffices.
    pub fn check_win(&self, row: usize, col: usize, connect: usize) -> bool {
        let Some(token) = self.get(row, col) else {
            return false;
        };

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(row, col, dr, dc, token) >= connect)
    }

    /// Length of the contiguous run of `token` through (row, col) along the
    /// line direction (dr, dc). The streak starts at 1 for the cell itself
    /// and extends both ways until a mismatch or the board edge.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, token: Token) -> usize {
        1 + self.count_from(row, col, dr, dc, token) + self.count_from(row, col, -dr, -dc, token)
    }

    fn count_from(&self, row: usize, col: usize, dr: isize, dc: isize, token: Token) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && r < self.rows as isize
            && c < self.cols as isize
            && self.get(r as usize, c as usize) == Some(token)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl fmt::Display for Board {
    /// Cells separated by `|`, one line per row, with column indices
    /// underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.get(row, col) {
                    Some(token) => write!(f, "|{}", token.glyph())?,
                    None => write!(f, "| ")?,
                }
            }
            writeln!(f, "|")?;
        }
        for col in 0..self.cols {
            write!(f, " {col}")?;
        }
        Ok(())
    }
}
