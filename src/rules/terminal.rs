//! Terminal conditions.
//!
//! "Checkmate" here means a king has been captured, and "stalemate" means
//! the side to move has no legal destination for any piece. Neither looks
//! at check.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, Coord, PieceKind};

use super::movement::is_legal_move;

/// Why a side won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    KingCaptured,
    Timeout,
    Resignation,
}

/// Why the game was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner { color: Color, reason: WinReason },
    Draw { reason: DrawReason },
}

impl Outcome {
    #[must_use]
    pub const fn win(color: Color, reason: WinReason) -> Self {
        Outcome::Winner { color, reason }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner { color, .. } => Some(*color),
            Outcome::Draw { .. } => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner() == Some(color)
    }

    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { color, reason } => {
                let why = match reason {
                    WinReason::KingCaptured => "king captured",
                    WinReason::Timeout => "time out",
                    WinReason::Resignation => "resignation",
                };
                write!(f, "{color} wins ({why})")
            }
            Outcome::Draw { reason: DrawReason::Stalemate } => f.write_str("draw (stalemate)"),
        }
    }
}

/// Is a king of `color` anywhere on the board?
#[must_use]
pub fn find_king(board: &Board, color: Color) -> bool {
    board.locate(PieceKind::King, color).is_some()
}

/// Does any piece of `color` have at least one legal destination?
///
/// Stops at the first legal move found.
#[must_use]
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| Coord::all().any(|to| is_legal_move(board, from, to)))
}

/// Decide whether the game is over on `board`, with `to_move` about to play.
///
/// A missing White king is checked first, then a missing Black king, then
/// whether `to_move` is stuck.
///
/// ```
/// use hotseat_chess::core::{Board, Color};
/// use hotseat_chess::rules::evaluate_terminal;
///
/// assert_eq!(evaluate_terminal(&Board::starting(), Color::White), None);
/// ```
#[must_use]
pub fn evaluate_terminal(board: &Board, to_move: Color) -> Option<Outcome> {
    if !find_king(board, Color::White) {
        return Some(Outcome::win(Color::Black, WinReason::KingCaptured));
    }
    if !find_king(board, Color::Black) {
        return Some(Outcome::win(Color::White, WinReason::KingCaptured));
    }
    if !has_any_legal_move(board, to_move) {
        return Some(Outcome::Draw {
            reason: DrawReason::Stalemate,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::win(Color::Black, WinReason::Timeout);
        assert!(result.is_winner(Color::Black));
        assert!(!result.is_winner(Color::White));
        assert!(!result.is_draw());

        let draw = Outcome::Draw {
            reason: DrawReason::Stalemate,
        };
        assert!(draw.is_draw());
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            Outcome::win(Color::White, WinReason::Resignation).to_string(),
            "white wins (resignation)"
        );
    }

    #[test]
    fn test_find_king() {
        let b = Board::starting();
        assert!(find_king(&b, Color::White));
        assert!(find_king(&b, Color::Black));
        assert!(!find_king(&Board::empty(), Color::White));
    }

    #[test]
    fn test_missing_white_king_checked_first() {
        assert_eq!(
            evaluate_terminal(&Board::empty(), Color::White),
            Some(Outcome::win(Color::Black, WinReason::KingCaptured))
        );
    }

    #[test]
    fn test_missing_black_king() {
        let b = board([
            "........",
            "........",
            "........",
            "........",
            "....K...",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(
            evaluate_terminal(&b, Color::Black),
            Some(Outcome::win(Color::White, WinReason::KingCaptured))
        );
    }

    #[test]
    fn test_stuck_side_is_a_draw() {
        // Black king in the corner with one escape square.
        let b = board([
            "K.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".......p",
            "......pk",
        ]);
        assert!(has_any_legal_move(&b, Color::Black));

        // Escape square filled by a pawn that is itself blocked.
        let b = board([
            "K.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "......pp",
            "......pk",
        ]);
        assert!(!has_any_legal_move(&b, Color::Black));
        assert_eq!(
            evaluate_terminal(&b, Color::Black),
            Some(Outcome::Draw {
                reason: DrawReason::Stalemate
            })
        );
        // White still has moves, so with White to move the game goes on.
        assert_eq!(evaluate_terminal(&b, Color::White), None);
    }

    #[test]
    fn test_starting_position_not_terminal() {
        assert_eq!(evaluate_terminal(&Board::starting(), Color::Black), None);
    }
}
