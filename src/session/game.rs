//! The game session state machine.
//!
//! `GameSession` owns everything that changes during a game: the board,
//! the side to move, the pending selection, the phase, the board history,
//! the clock and the outcome. Each user action is one method; each method
//! either applies its whole transition or returns a `Rejection` and leaves
//! the session as it was.
//!
//! ## Example
//!
//! ```
//! use hotseat_chess::core::{Color, Coord, TimeControl};
//! use hotseat_chess::session::{GameSession, Phase};
//!
//! let mut game = GameSession::new();
//! game.configure(TimeControl::new(5, 2)).unwrap();
//!
//! // Drag e2 to e4.
//! game.attempt_move(Coord::at(6, 4), Coord::at(4, 4)).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert_eq!(game.clock().remaining(Color::White), 302);
//!
//! game.undo().unwrap();
//! assert_eq!(game.turn(), Color::White);
//! assert_eq!(game.phase(), Phase::Running);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, Color, Coord, Piece, TimeControl};
use crate::rules::{self, Destinations, Outcome, WinReason};

use super::clock::Clock;
use super::error::Rejection;
use super::phase::Phase;

/// A move the session accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    /// Whatever stood on `to` before the move.
    pub captured: Option<Piece>,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click {
    /// The clicked piece is now selected.
    Selected(Coord),
    /// The selected piece moved to the clicked square.
    Moved(MoveRecord),
}

/// What a clock tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Time left on the ticked clock.
    Counting { remaining: u32 },
    /// The ticked side ran out of time.
    Flagged(Outcome),
}

/// One two-player game on a shared board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    turn: Color,
    selection: Option<Coord>,
    phase: Phase,
    /// Boards before each accepted move, oldest first.
    history: Vector<Board>,
    clock: Clock,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// A session awaiting configuration, at the starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::starting(), Color::White)
    }

    /// A session awaiting configuration, at an arbitrary position.
    ///
    /// `reset` still returns to the standard starting position.
    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: None,
            phase: Phase::AwaitingConfig,
            history: Vector::new(),
            clock: Clock::default(),
            outcome: None,
        }
    }

    // === Read access for the rendering layer ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Square picked by a first click, awaiting its target.
    #[must_use]
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Past boards, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether `undo` would currently be accepted.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Destinations of the selected piece, for highlighting.
    #[must_use]
    pub fn selected_destinations(&self) -> Destinations {
        self.selection
            .map(|from| rules::legal_destinations(&self.board, from))
            .unwrap_or_default()
    }

    // === Transitions ===

    /// Set the time control and start White's clock.
    ///
    /// Only accepted while awaiting configuration, and only with a positive
    /// number of minutes.
    pub fn configure(&mut self, time_control: TimeControl) -> Result<(), Rejection> {
        self.require(&[Phase::AwaitingConfig], "configure")?;
        if !time_control.is_valid() {
            trace!(%time_control, "rejected time control");
            return Err(Rejection::InvalidTimeControl(time_control));
        }

        self.clock = Clock::new(time_control);
        self.phase = Phase::Running;
        self.clock.start(self.turn);
        debug!(%time_control, turn = %self.turn, "game started");
        Ok(())
    }

    /// Handle a click on `square`.
    ///
    /// With nothing selected, selects the clicked piece if it belongs to the
    /// side to move. With a selection, tries to move the selected piece to
    /// `square`; the selection is cleared either way.
    pub fn click(&mut self, square: Coord) -> Result<Click, Rejection> {
        match self.selection {
            None => self.select(square).map(Click::Selected),
            Some(from) => self.attempt_move(from, square).map(Click::Moved),
        }
    }

    /// Select the piece on `square` for a later move.
    pub fn select(&mut self, square: Coord) -> Result<Coord, Rejection> {
        self.require(&[Phase::Running], "select")?;
        self.own_piece(square)?;
        self.selection = Some(square);
        trace!(%square, "selected");
        Ok(square)
    }

    /// Move the piece on `from` to `to`.
    ///
    /// This is the drag-and-drop path and the second half of a click
    /// sequence. The piece must belong to the side to move and the move
    /// must be legal. On success the pre-move board is pushed to history,
    /// the game-end conditions are checked on the new board, and if the game
    /// goes on the mover gets the increment and the clock switches sides.
    /// The selection is cleared whatever happens.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> Result<MoveRecord, Rejection> {
        self.require(&[Phase::Running], "move")?;
        let result = self.apply_move(from, to);
        self.selection = None;
        if let Err(rejection) = &result {
            trace!(%from, %to, %rejection, "move rejected");
        }
        result
    }

    /// Restore the board before the last move and give the turn back.
    ///
    /// Accepted in any phase while there is history. Time already spent is
    /// not refunded. If the game is running, the clock switches to the side
    /// now on move; otherwise it stays stopped. The phase and any recorded
    /// outcome are left alone.
    pub fn undo(&mut self) -> Result<(), Rejection> {
        let previous = self.history.pop_back().ok_or(Rejection::NothingToUndo)?;

        self.board = previous;
        self.turn = self.turn.opponent();
        self.selection = None;
        if self.phase == Phase::Running {
            self.clock.start(self.turn);
        }
        debug!(turn = %self.turn, history = self.history.len(), "move undone");
        Ok(())
    }

    /// Pause a running game or resume a paused one. Returns the new phase.
    pub fn pause_or_resume(&mut self) -> Result<Phase, Rejection> {
        match self.phase {
            Phase::Running => {
                self.clock.stop();
                self.phase = Phase::Paused;
            }
            Phase::Paused => {
                self.clock.start(self.turn);
                self.phase = Phase::Running;
            }
            phase => {
                return Err(Rejection::WrongPhase {
                    action: "pause or resume",
                    phase,
                })
            }
        }
        debug!(phase = %self.phase, "pause toggled");
        Ok(self.phase)
    }

    /// The side to move resigns; the other side wins.
    pub fn resign(&mut self) -> Result<Outcome, Rejection> {
        if !self.phase.is_live() {
            return Err(Rejection::WrongPhase {
                action: "resign",
                phase: self.phase,
            });
        }
        let outcome = Outcome::win(self.turn.opponent(), WinReason::Resignation);
        self.finish(outcome);
        Ok(outcome)
    }

    /// Back to the starting position, awaiting configuration.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("session reset");
    }

    /// One second elapsed on `color`'s clock.
    ///
    /// Only one clock runs at a time, so a tick is ignored (rejected) unless
    /// the game is running and `color` is the side whose clock runs. A tick
    /// racing with a move or the end of the game changes nothing. Reaching
    /// zero ends the game in the opponent's favour.
    pub fn tick(&mut self, color: Color) -> Result<Tick, Rejection> {
        self.require(&[Phase::Running], "tick")?;
        let remaining = self
            .clock
            .tick(color)
            .ok_or(Rejection::InactiveClock(color))?;
        trace!(%color, remaining, "tick");

        if remaining > 0 {
            return Ok(Tick::Counting { remaining });
        }
        let outcome = Outcome::win(color.opponent(), WinReason::Timeout);
        self.finish(outcome);
        Ok(Tick::Flagged(outcome))
    }

    // === Internals ===

    fn require(&self, allowed: &[Phase], action: &'static str) -> Result<(), Rejection> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(Rejection::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn own_piece(&self, square: Coord) -> Result<Piece, Rejection> {
        let piece = self
            .board
            .get(square)
            .ok_or(Rejection::EmptySquare(square))?;
        if piece.color != self.turn {
            return Err(Rejection::NotYourPiece {
                square,
                owner: piece.color,
                turn: self.turn,
            });
        }
        Ok(piece)
    }

    fn apply_move(&mut self, from: Coord, to: Coord) -> Result<MoveRecord, Rejection> {
        let piece = self.own_piece(from)?;
        if !rules::is_legal_move(&self.board, from, to) {
            return Err(Rejection::IllegalMove { piece, from, to });
        }

        let captured = self.board.get(to);
        let next = self.board.with_move(from, to);
        self.history.push_back(self.board);
        self.board = next;

        let mover = self.turn;
        let outcome = rules::evaluate_terminal(&self.board, mover.opponent());
        debug!(%piece, %from, %to, ?captured, "move applied");

        match outcome {
            Some(outcome) => self.finish(outcome),
            None => {
                self.clock.stop();
                self.clock.add_increment(mover);
                self.turn = mover.opponent();
                self.clock.start(self.turn);
            }
        }

        Ok(MoveRecord {
            piece,
            from,
            to,
            captured,
            outcome,
        })
    }

    fn finish(&mut self, outcome: Outcome) {
        self.clock.stop();
        self.phase = Phase::Ended;
        self.selection = None;
        self.outcome = Some(outcome);
        debug!(%outcome, "game over");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
