//! Per-piece move legality.
//!
//! These are pure functions over a board snapshot. They do not know whose
//! turn it is: the session checks that the moving piece belongs to the side
//! to move before asking. Castling, en passant and promotion do not exist,
//! and a king may step onto an attacked square.

use smallvec::SmallVec;

use crate::core::{Board, Coord, Piece, PieceKind};

/// Destinations of a single piece. A queen in the open has 27.
pub type Destinations = SmallVec<[Coord; 32]>;

/// Can the piece on `from` move to `to`?
///
/// False when `from` is empty or when `to` holds a piece of the mover's
/// color (which also rules out `from == to`).
///
/// ```
/// use hotseat_chess::core::{Board, Coord};
/// use hotseat_chess::rules::is_legal_move;
///
/// let board = Board::starting();
/// assert!(is_legal_move(&board, Coord::at(6, 4), Coord::at(4, 4)));
/// assert!(!is_legal_move(&board, Coord::at(7, 0), Coord::at(5, 0)));
/// ```
#[must_use]
pub fn is_legal_move(board: &Board, from: Coord, to: Coord) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Queen => rook_move(board, from, to) || bishop_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

/// Are all squares strictly between `from` and `to` empty?
///
/// Walks the unit step from `from` toward `to`. Only meaningful along a
/// rank, file or diagonal; any other pair of squares yields `false`.
/// Neither endpoint is inspected, so adjacent squares (and `from == to`)
/// always pass.
#[must_use]
pub fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned {
        return false;
    }

    let step = (d_row.signum(), d_col.signum());
    let mut cursor = from;
    loop {
        let Some(next) = cursor.offset(step.0, step.1) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        cursor = next;
    }
}

/// Every square the piece on `from` may move to, row-major.
///
/// Empty when `from` is empty.
#[must_use]
pub fn legal_destinations(board: &Board, from: Coord) -> Destinations {
    if board.is_empty(from) {
        return Destinations::new();
    }
    Coord::all()
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}

fn pawn_move(board: &Board, pawn: Piece, from: Coord, to: Coord) -> bool {
    let direction = pawn.color.pawn_direction();
    let (d_row, d_col) = from.delta(to);

    if d_col == 0 && board.is_empty(to) {
        if d_row == direction {
            return true;
        }
        if d_row == 2 * direction && from.row() == pawn.color.pawn_home_row() {
            return from
                .offset(direction, 0)
                .is_some_and(|between| board.is_empty(between));
        }
        return false;
    }

    // Diagonal capture only; the friendly case was rejected by the caller.
    d_col.abs() == 1 && d_row == direction && !board.is_empty(to)
}

fn rook_move(board: &Board, from: Coord, to: Coord) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && path_clear(board, from, to)
}

fn knight_move(from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

fn bishop_move(board: &Board, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() == d_col.abs() && path_clear(board, from, to)
}

fn king_move(from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}
