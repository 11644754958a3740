//! Board coordinates.
//!
//! Rows count from the top of the board as printed: row 0 is Black's back
//! rank, row 7 is White's. Columns count from the a-file. In algebraic
//! notation `e2` is row 6, column 4.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square's (row, col) position, both in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

/// Failure to parse algebraic notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordError {
    #[error("expected two characters like \"e2\", got {0:?}")]
    BadLength(String),
    #[error("file must be a-h, got {0:?}")]
    BadFile(char),
    #[error("rank must be 1-8, got {0:?}")]
    BadRank(char),
}

impl Coord {
    /// Checked constructor. Returns `None` off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Construct a coordinate the caller knows is on the board.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Coordinate off the board");
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Shift by a (row, col) delta, staying on the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Signed (row, col) delta from `self` to `other`.
    #[must_use]
    pub fn delta(self, other: Coord) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// All 64 squares, row-major from (0, 0).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'0' + (BOARD_SIZE - self.row));
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCoordError::BadLength(s.to_string()));
        };

        let file_lower = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file_lower) {
            return Err(ParseCoordError::BadFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(ParseCoordError::BadRank(rank));
        }

        let col = file_lower as u8 - b'a';
        let row = BOARD_SIZE - (rank as u8 - b'0');
        Ok(Self { row, col })
    }
}
