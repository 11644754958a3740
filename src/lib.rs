//! # hotseat-chess
//!
//! A two-player chess game on one shared board: move legality, turn
//! alternation, a countdown clock with per-move increment, and undo.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `rules` is a set of functions over an immutable
//!    `Board` snapshot. It never stores state and never checks whose turn
//!    it is.
//!
//! 2. **One session value**: `GameSession` owns board, turn, clock, history
//!    and outcome, and changes them through one method per user action.
//!    A refused action returns a `Rejection` and changes nothing.
//!
//! 3. **No wall clock**: the session only sees `tick(color)` calls. Whatever
//!    schedules them lives outside the crate.
//!
//! ## Simplified rules
//!
//! There is no castling, en passant, promotion or check. A game is won by
//! capturing the king (or on time, or by resignation) and drawn when the side
//! to move has no legal destination at all.
//!
//! ## Modules
//!
//! - `core`: colors, pieces, coordinates, boards, time control
//! - `rules`: move legality and game-end detection
//! - `session`: the game state machine and its clock
//! - `display`: strings for a host UI

pub mod core;
pub mod rules;
pub mod session;
pub mod display;

// Re-export commonly used types
pub use crate::core::{Board, Color, ColorMap, Coord, Piece, PieceKind, TimeControl};

pub use crate::rules::{
    evaluate_terminal, find_king, has_any_legal_move, is_legal_move, legal_destinations,
    path_clear, DrawReason, Outcome, WinReason,
};

pub use crate::session::{Click, Clock, GameSession, MoveRecord, Phase, Rejection, Tick};
