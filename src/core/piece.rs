//! Pieces and their single-character glyph encoding.
//!
//! A piece's color is an explicit field. The glyph form (`K`, `q`, `P`, ...)
//! is derived from it: upper case is White, lower case is Black. Parsing a
//! glyph goes the other way, so both directions agree by construction.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// The six kinds of chess piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lower-case glyph for this kind.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a glyph of either case.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Display name, e.g. "Knight".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[must_use]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, Color::White)
    }

    #[must_use]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Color::Black)
    }

    /// Glyph for this piece: upper case for White, lower case for Black.
    #[must_use]
    pub const fn glyph(self) -> char {
        let glyph = self.kind.glyph();
        match self.color {
            Color::White => glyph.to_ascii_uppercase(),
            Color::Black => glyph,
        }
    }

    /// Parse a glyph. The case decides the color.
    ///
    /// ```
    /// use hotseat_chess::core::{Color, Piece, PieceKind};
    ///
    /// assert_eq!(Piece::from_glyph('N'), Some(Piece::white(PieceKind::Knight)));
    /// assert_eq!(Piece::from_glyph('k').map(|p| p.color), Some(Color::Black));
    /// assert_eq!(Piece::from_glyph('x'), None);
    /// ```
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        let kind = PieceKind::from_glyph(glyph)?;
        let color = if glyph.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }

    /// Every piece: 6 kinds x 2 colors.
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::ALL
            .into_iter()
            .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| Piece::new(kind, color)))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind.name())
    }
}
