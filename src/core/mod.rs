//! Core value types: colors, pieces, coordinates, boards, configuration.
//!
//! Everything here is a plain value. Nothing in this module knows about
//! move legality or whose turn it is.

pub mod color;
pub mod piece;
pub mod coord;
pub mod board;
pub mod config;

pub use color::{Color, ColorMap};
pub use piece::{Piece, PieceKind};
pub use coord::{Coord, ParseCoordError, BOARD_SIZE};
pub use board::{Board, ParseBoardError};
pub use config::TimeControl;
