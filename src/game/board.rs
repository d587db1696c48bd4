use serde::Serialize;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning run.
const RUN: isize = 4;

/// Scan directions as (row step, col step): horizontal, vertical,
/// diagonal down-right, diagonal down-left. Order is part of the
/// tie-break when more than one run exists.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Undecided,
    Win(Cell),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {0} is out of range (0-6)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cannot drop an empty cell")]
    EmptyPiece,
}

/// A 6x7 grid. Boards are values: dropping a piece returns a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rows from top to bottom, for rendering.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in a column, if any
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Return a new board with `piece` dropped into `col`.
    pub fn drop_piece(&self, col: usize, piece: Cell) -> Result<Board, DropError> {
        if col >= COLS {
            return Err(DropError::InvalidColumn(col));
        }
        if piece == Cell::Empty {
            return Err(DropError::EmptyPiece);
        }

        let row = self.landing_row(col).ok_or(DropError::ColumnFull(col))?;
        let mut next = *self;
        next.cells[row][col] = piece;
        Ok(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }

    /// Number of non-empty cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Scan the whole board for four in a row.
    ///
    /// Origins are visited top-to-bottom, left-to-right, and each origin is
    /// checked forward in [`DIRECTIONS`] order, so every run is seen exactly
    /// once from its first cell. The first run found wins.
    pub fn evaluate(&self) -> Outcome {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }
                if DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_from(row, col, dr, dc, cell))
                {
                    return Outcome::Win(cell);
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    /// Whether `cell` occupies the origin and the next three cells along
    /// (dr, dc).
    fn run_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (1..RUN).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == cell
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
