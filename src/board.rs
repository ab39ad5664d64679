//! Gomoku board state, serialization, and win detection.

use derive_more::{Display, Error};
use std::fmt;
use tracing::instrument;

/// Number of consecutive same-mark cells required to win.
const WINNING_RUN: u32 = 5;

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Unoccupied cell.
    Empty,
    /// Cell held by player X (moves first).
    X,
    /// Cell held by player O (moves second).
    O,
}

impl Mark {
    /// Returns the mark of the other player. `Empty` has no opponent and is
    /// returned unchanged.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// One-character wire encoding used in the `table` query parameter.
    pub fn as_char(self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parses the one-character wire encoding.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownMark`] for any other character.
    pub fn from_char(c: char) -> Result<Self, BoardError> {
        match c {
            '-' => Ok(Mark::Empty),
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            _ => Err(BoardError::UnknownMark { found: c }),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Board error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates outside the board.
    #[display("coordinates ({x}, {y}) outside {width}x{height} board")]
    OutOfBounds {
        /// 1-based column of the rejected mutation.
        x: u32,
        /// 1-based row of the rejected mutation.
        y: u32,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
    /// Serialized table string has the wrong length.
    #[display("table string length {actual}, expected {expected}")]
    TableLength {
        /// Expected length (width times height).
        expected: usize,
        /// Length of the string received.
        actual: usize,
    },
    /// Serialized table string contains an unknown cell character.
    #[display("unknown mark character '{found}' in table string")]
    UnknownMark {
        /// The offending character.
        found: char,
    },
}

/// Fixed-size gomoku board.
///
/// Cells are stored row-major. The public mutation API is 1-based to match
/// the agent wire protocol; internal indexing is 0-based. Dimensions are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Mark::Empty; (width as usize) * (height as usize)],
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets the cell at 1-based `(x, y)` to the given mark.
    ///
    /// This is a thin primitive: it performs no legality check against the
    /// previous cell value. Callers decide whether overwriting is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] when the coordinates fall outside
    /// the board.
    pub fn mark(&mut self, x: u32, y: u32, mark: Mark) -> Result<(), BoardError> {
        let index = self.index(x, y).ok_or(BoardError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[index] = mark;
        Ok(())
    }

    /// Returns the mark at 1-based `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: u32, y: u32) -> Option<Mark> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Returns the winning mark, if any.
    ///
    /// Only horizontal and vertical runs of five are detected; diagonal runs
    /// are intentionally not checked. Player O is checked before player X,
    /// which is the tie-break policy when both hold a qualifying line.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Mark> {
        for mark in [Mark::O, Mark::X] {
            if self.has_horizontal_win(mark) || self.has_vertical_win(mark) {
                return Some(mark);
            }
        }
        None
    }

    /// Serializes the board to one character per cell, row-major.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|cell| cell.as_char()).collect()
    }

    /// Reconstructs a board from its serialized `table` string.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the string length does not equal
    /// `width * height` or a character is not a valid mark.
    pub fn decode(width: u32, height: u32, table: &str) -> Result<Self, BoardError> {
        let expected = (width as usize) * (height as usize);
        let actual = table.chars().count();
        if actual != expected {
            return Err(BoardError::TableLength { expected, actual });
        }
        let cells = table
            .chars()
            .map(Mark::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x == 0 || y == 0 || x > self.width || y > self.height {
            return None;
        }
        Some(((y - 1) as usize) * (self.width as usize) + (x - 1) as usize)
    }

    /// 0-based cell accessor for internal scans.
    fn at(&self, col: usize, row: usize) -> Mark {
        self.cells[row * self.width as usize + col]
    }

    fn has_horizontal_win(&self, mark: Mark) -> bool {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..h).any(|row| Self::has_run((0..w).map(|col| self.at(col, row)), mark))
    }

    fn has_vertical_win(&self, mark: Mark) -> bool {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..w).any(|col| Self::has_run((0..h).map(|row| self.at(col, row)), mark))
    }

    /// Scans a line, counting consecutive cells equal to `mark` and resetting
    /// on any other value.
    fn has_run(line: impl Iterator<Item = Mark>, mark: Mark) -> bool {
        let mut count = 0;
        for cell in line {
            if cell == mark {
                count += 1;
                if count == WINNING_RUN {
                    return true;
                }
            } else {
                count = 0;
            }
        }
        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
