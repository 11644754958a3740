//! Move legality and terminal-condition detection.
//!
//! Everything here is a pure function of a `Board` snapshot:
//! - Whether a single move is legal (`is_legal_move`)
//! - Which squares a piece can reach (`legal_destinations`)
//! - Whether the game has ended (`evaluate_terminal`)
//!
//! The session calls into these but the rules never hold state.

pub mod movement;
pub mod terminal;

pub use movement::{is_legal_move, legal_destinations, path_clear, Destinations};
pub use terminal::{evaluate_terminal, find_king, has_any_legal_move, DrawReason, Outcome, WinReason};
