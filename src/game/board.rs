//! Board representation and wire encoding

use std::{fmt, str::FromStr};

use super::lines::LineAnalyzer;

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used in the stored board string
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }
}

/// The mark a move places on the board.
///
/// `X` is always placed by player 1 and `O` by player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Nine cells in row-major order.
///
/// Positions are 0-based internally; the 1-based `space` numbers used in
/// transactions are converted at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// True once no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Return a copy of the board with `mark` written at `pos`.
    ///
    /// Occupancy is not checked here; the engine validates the move first.
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[pos] = mark.to_cell();
        next
    }

    /// Check if a mark has completed a line
    pub fn has_won(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(&self.cells, mark)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Stored representation, e.g. `X---O----`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Rows of the board, for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(3)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse the stored representation.
    ///
    /// Boards come from state entries, so a malformed board is reported as an
    /// internal inconsistency rather than a validation failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::internal(format!(
                "board '{s}' has {} cells, expected {BOARD_SIZE}",
                chars.len()
            )));
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| {
                crate::Error::internal(format!("invalid character '{c}' at position {i} in '{s}'"))
            })?;
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
