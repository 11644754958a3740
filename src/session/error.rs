//! Why a session transition was refused.
//!
//! A rejection is not a fault: the session is left as it was (apart from a
//! cleared selection after a failed move) and the caller may simply ignore it.

use crate::core::{Color, Coord, Piece, TimeControl};

use super::phase::Phase;

/// A transition the session refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The action is not available in the current phase.
    #[error("cannot {action} while the game is {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    /// No piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Coord),

    /// The origin piece belongs to the side not on move.
    #[error("the piece on {square} is {owner}, but it is {turn}'s turn")]
    NotYourPiece { square: Coord, owner: Color, turn: Color },

    /// The piece cannot move that way.
    #[error("{piece} cannot move from {from} to {to}")]
    IllegalMove { piece: Piece, from: Coord, to: Coord },

    /// History is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Zero minutes on the clock.
    #[error("time control {0} needs at least one minute")]
    InvalidTimeControl(TimeControl),

    /// A tick arrived for a clock that is not running.
    #[error("the {0} clock is not running")]
    InactiveClock(Color),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceKind;

    #[test]
    fn test_messages() {
        let wrong = Rejection::WrongPhase {
            action: "move",
            phase: Phase::Paused,
        };
        assert_eq!(wrong.to_string(), "cannot move while the game is paused");

        let illegal = Rejection::IllegalMove {
            piece: Piece::white(PieceKind::Rook),
            from: Coord::at(7, 0),
            to: Coord::at(5, 1),
        };
        assert_eq!(illegal.to_string(), "white Rook cannot move from a1 to b3");

        assert_eq!(
            Rejection::InvalidTimeControl(TimeControl::new(0, 5)).to_string(),
            "time control 0+5 needs at least one minute"
        );
    }
}
