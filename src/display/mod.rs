//! Presentation helpers for a host UI.
//!
//! Nothing here is game state: these turn session values into the strings a
//! board view shows.

use crate::core::{Color, Piece, PieceKind};
use crate::session::GameSession;

/// Clock reading as `m:ss`.
///
/// ```
/// use hotseat_chess::display::format_clock;
///
/// assert_eq!(format_clock(300), "5:00");
/// assert_eq!(format_clock(65), "1:05");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Image file for a piece, e.g. `WhiteKnight.png`.
#[must_use]
pub fn asset_name(piece: Piece) -> &'static str {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => "WhitePawn.png",
        (Color::White, PieceKind::Rook) => "WhiteRook.png",
        (Color::White, PieceKind::Knight) => "WhiteKnight.png",
        (Color::White, PieceKind::Bishop) => "WhiteBishop.png",
        (Color::White, PieceKind::Queen) => "WhiteQueen.png",
        (Color::White, PieceKind::King) => "WhiteKing.png",
        (Color::Black, PieceKind::Pawn) => "BlackPawn.png",
        (Color::Black, PieceKind::Rook) => "BlackRook.png",
        (Color::Black, PieceKind::Knight) => "BlackKnight.png",
        (Color::Black, PieceKind::Bishop) => "BlackBishop.png",
        (Color::Black, PieceKind::Queen) => "BlackQueen.png",
        (Color::Black, PieceKind::King) => "BlackKing.png",
    }
}

/// Turn indicator: the winner once decided, otherwise whose turn it is.
#[must_use]
pub fn status_line(session: &GameSession) -> String {
    match session.outcome() {
        Some(outcome) => match outcome.winner() {
            Some(color) => format!("Winner: {color}"),
            None => "Winner: draw".to_string(),
        },
        None => format!("{}'s Turn", session.turn()),
    }
}

/// Both clocks, White first: `White : 5:00 | Black : 4:59`.
#[must_use]
pub fn clock_line(session: &GameSession) -> String {
    let clock = session.clock();
    format!(
        "White : {} | Black : {}",
        format_clock(clock.remaining(Color::White)),
        format_clock(clock.remaining(Color::Black))
    )
}
