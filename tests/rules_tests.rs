//! Rules engine integration tests.
//!
//! These exercise `is_legal_move`, `path_clear` and the terminal checks
//! through the public API only.

use hotseat_chess::core::{Board, Color, Coord, Piece, PieceKind};
use hotseat_chess::rules::{
    evaluate_terminal, find_king, has_any_legal_move, is_legal_move, legal_destinations,
    path_clear, Outcome, WinReason,
};

fn lone(piece: Piece, at: Coord) -> Board {
    Board::empty().with_piece(at, Some(piece))
}

// =============================================================================
// Piece movement
// =============================================================================

/// All eight knight offsets are legal from a central square.
#[test]
fn test_knight_all_offsets_from_center() {
    let from = Coord::at(4, 4);
    let board = lone(Piece::white(PieceKind::Knight), from);
    let offsets = [(2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2), (1, -2), (2, -1)];

    for (d_row, d_col) in offsets {
        let to = from.offset(d_row, d_col).unwrap();
        assert!(is_legal_move(&board, from, to), "knight {from} -> {to}");
    }
    assert_eq!(legal_destinations(&board, from).len(), 8);
}

/// Knights ignore pieces in between.
#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::starting();
    assert!(is_legal_move(&board, Coord::at(0, 6), Coord::at(2, 5)));
    assert!(is_legal_move(&board, Coord::at(0, 6), Coord::at(2, 7)));
}

/// A king may move into a square the enemy attacks.
#[test]
fn test_king_moves_into_attack() {
    let board = Board::empty()
        .with_piece(Coord::at(7, 4), Some(Piece::white(PieceKind::King)))
        .with_piece(Coord::at(0, 3), Some(Piece::black(PieceKind::Rook)));
    assert!(is_legal_move(&board, Coord::at(7, 4), Coord::at(7, 3)));
}

/// Sliding pieces stop at the first blocker and may capture it.
#[test]
fn test_sliders_capture_first_blocker_only() {
    let board = Board::empty()
        .with_piece(Coord::at(7, 0), Some(Piece::white(PieceKind::Queen)))
        .with_piece(Coord::at(4, 3), Some(Piece::black(PieceKind::Pawn)))
        .with_piece(Coord::at(2, 5), Some(Piece::black(PieceKind::Rook)));

    assert!(is_legal_move(&board, Coord::at(7, 0), Coord::at(4, 3)));
    assert!(!is_legal_move(&board, Coord::at(7, 0), Coord::at(2, 5)));
}

/// Black pawns advance toward row 7.
#[test]
fn test_black_pawn_direction() {
    let board = Board::starting();
    assert!(is_legal_move(&board, Coord::at(1, 0), Coord::at(2, 0)));
    assert!(is_legal_move(&board, Coord::at(1, 0), Coord::at(3, 0)));
    assert!(!is_legal_move(&board, Coord::at(1, 0), Coord::at(0, 0)));
}

/// The engine does not care whose turn it is.
#[test]
fn test_engine_ignores_turn() {
    let board = Board::starting();
    assert!(is_legal_move(&board, Coord::at(0, 1), Coord::at(2, 2)));
    assert!(is_legal_move(&board, Coord::at(7, 1), Coord::at(5, 2)));
}

/// Unaligned squares never have a clear path.
#[test]
fn test_path_clear_unaligned() {
    let board = Board::empty();
    assert!(!path_clear(&board, Coord::at(0, 0), Coord::at(2, 1)));
    assert!(path_clear(&board, Coord::at(0, 0), Coord::at(7, 7)));
}

// =============================================================================
// Terminal conditions
// =============================================================================

/// A board with a lone White king is a White win before any move.
#[test]
fn test_lone_white_king_is_white_win() {
    let board = lone(Piece::white(PieceKind::King), Coord::at(4, 4));

    assert!(find_king(&board, Color::White));
    assert!(!find_king(&board, Color::Black));
    for to_move in Color::ALL {
        assert_eq!(
            evaluate_terminal(&board, to_move),
            Some(Outcome::win(Color::White, WinReason::KingCaptured))
        );
    }
}

/// The starting position has moves for both sides.
#[test]
fn test_starting_position_has_moves() {
    let board = Board::starting();
    assert!(has_any_legal_move(&board, Color::White));
    assert!(has_any_legal_move(&board, Color::Black));
}

/// A side with no pieces has no moves.
#[test]
fn test_no_pieces_no_moves() {
    let board = lone(Piece::white(PieceKind::King), Coord::at(0, 0));
    assert!(!has_any_legal_move(&board, Color::Black));
}
