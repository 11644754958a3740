//! Board snapshots.
//!
//! A `Board` is a plain `Copy` value. Every mutation returns a new snapshot,
//! so history entries never alias the live board.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coord::{Coord, BOARD_SIZE};
use super::piece::{Piece, PieceKind};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Failure to build a board from glyph rows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown glyph {glyph:?} at row {row}, col {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}

/// An 8x8 grid; each square holds at most one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::black(kind));
            board.squares[1][col] = Some(Piece::black(PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::white(PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::white(kind));
        }
        board
    }

    /// Build a board from 8 rows of glyphs, row 0 first.
    ///
    /// Upper-case glyphs are White, lower-case Black; a space or `.` is empty.
    ///
    /// ```
    /// use hotseat_chess::core::{Board, Coord, Piece, PieceKind};
    ///
    /// let board = Board::from_rows([
    ///     "....k...",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "....K...",
    /// ]).unwrap();
    /// assert_eq!(board.get(Coord::at(7, 4)), Some(Piece::white(PieceKind::King)));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: [S; 8]) -> Result<Self, ParseBoardError> {
        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let len = text.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(ParseBoardError::RowLength { row, len });
            }
            for (col, glyph) in text.chars().enumerate() {
                board.squares[row][col] = match glyph {
                    ' ' | '.' => None,
                    _ => Some(
                        Piece::from_glyph(glyph)
                            .ok_or(ParseBoardError::UnknownGlyph { glyph, row, col })?,
                    ),
                };
            }
        }
        Ok(board)
    }

    /// Piece on a square, if any.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Piece> {
        self.squares[coord.row() as usize][coord.col() as usize]
    }

    /// Is the square empty?
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// A copy of this board with one square replaced.
    #[must_use]
    pub fn with_piece(mut self, coord: Coord, piece: Option<Piece>) -> Self {
        self.squares[coord.row() as usize][coord.col() as usize] = piece;
        self
    }

    /// A copy with the piece on `from` moved to `to`.
    ///
    /// Whatever stood on `to` is overwritten. No legality check.
    #[must_use]
    pub fn with_move(self, from: Coord, to: Coord) -> Self {
        let moving = self.get(from);
        self.with_piece(from, None).with_piece(to, moving)
    }

    /// Every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self.get(coord).map(|piece| (coord, piece)))
    }

    /// Squares holding pieces of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Where the first piece matching `kind` and `color` stands.
    #[must_use]
    pub fn locate(&self, kind: PieceKind, color: Color) -> Option<Coord> {
        self.occupied()
            .find(|(_, piece)| *piece == Piece::new(kind, color))
            .map(|(coord, _)| coord)
    }

    /// The board as 8 glyph rows, `.` for empty.
    #[must_use]
    pub fn to_rows(&self) -> [String; 8] {
        std::array::from_fn(|row| {
            self.squares[row]
                .iter()
                .map(|square| square.map_or('.', Piece::glyph))
                .collect()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
