//! Game session: the mutable side of a game.
//!
//! - `GameSession`: board, turn, selection, history, clock and outcome
//! - `Clock`: per-side countdown driven by external ticks
//! - `Phase`: lifecycle state
//! - `Rejection`: why a transition was refused

pub mod clock;
pub mod error;
pub mod game;
pub mod phase;

pub use clock::Clock;
pub use error::Rejection;
pub use game::{Click, GameSession, MoveRecord, Tick};
pub use phase::Phase;
