//! Driver-owned game session.
//!
//! The engine knows nothing about modes, pacing, or pending opponent moves.
//! This module layers them on top: it owns the current [`GameState`], the
//! selected [`Mode`], and a generation counter that is bumped on every
//! restart or mode change. An opponent request carries the generation it was
//! issued under plus its own request number, and only the reply to the one
//! outstanding request of the current generation is applied.

use crate::mode::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use strictly_tictactoe::{Board, GameState, Mark, MoveError, Outcome, apply_move};
use tracing::{debug, info, instrument, warn};

/// A request for the heuristic opponent, stamped with the game generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct OpponentTicket {
    /// Generation the request was issued under.
    generation: u64,
    /// Number of this request, unique within the session.
    request: u64,
    /// Board the opponent should answer.
    board: Board,
    /// Mark the opponent plays.
    own: Mark,
    /// Mark of the human player.
    opponent: Mark,
}

/// What happened to an opponent reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The move was applied; holds the new state.
    Applied(GameState),
    /// The reply answers an earlier request or game; dropped.
    Stale,
    /// The engine refused the move.
    Rejected(MoveError),
    /// The advisor had no move to offer.
    NoMove,
}

/// Error from a human move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// It is the opponent's turn, or its reply is still pending.
    #[display("Not your turn")]
    #[from(ignore)]
    NotYourTurn,

    /// The engine rejected the move.
    #[display("{}", _0)]
    Move(MoveError),
}

/// One game plus the driver state around it.
#[derive(Debug, Clone)]
pub struct DuelSession {
    state: GameState,
    mode: Mode,
    generation: u64,
    requests: u64,
    /// Request number of the outstanding ticket.
    pending: Option<u64>,
    human_mark: Mark,
    opponent_mark: Mark,
}

impl DuelSession {
    /// Creates a session with a fresh game.
    pub fn new(mode: Mode, human_mark: Mark, opponent_mark: Mark) -> Self {
        Self::resume(mode, human_mark, opponent_mark, GameState::new())
    }

    /// Creates a session around an existing game.
    #[instrument(skip(state), fields(status = %state.status_text()))]
    pub fn resume(mode: Mode, human_mark: Mark, opponent_mark: Mark, state: GameState) -> Self {
        info!(%mode, %human_mark, %opponent_mark, "Creating duel session");
        Self {
            state,
            mode,
            generation: 0,
            requests: 0,
            pending: None,
            human_mark,
            opponent_mark,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Counter bumped on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark played from the keyboard when the opponent is active.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Mark played by the heuristic opponent.
    pub fn opponent_mark(&self) -> Mark {
        self.opponent_mark
    }

    /// True while an opponent reply is outstanding.
    pub fn thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a new game in the same mode.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn restart(&mut self) {
        self.reset();
        info!(generation = self.generation, "Game restarted");
    }

    /// Switches mode, which always starts a new game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
        info!(%mode, generation = self.generation, "Mode changed");
    }

    fn reset(&mut self) {
        if self.pending.take().is_some() {
            debug!(generation = self.generation, "Abandoning pending opponent move");
        }
        self.state = GameState::new();
        self.generation += 1;
    }

    /// Applies a move typed by a human.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotYourTurn`] when the opponent is due to move or is
    /// still thinking, otherwise any engine rejection.
    #[instrument(skip(self), fields(mode = %self.mode, turn = %self.state.turn()))]
    pub fn play(&mut self, cell: usize) -> Result<&GameState, SessionError> {
        if self.mode.has_opponent()
            && !self.state.outcome().is_terminal()
            && (self.pending.is_some() || self.state.turn() == self.opponent_mark)
        {
            debug!(cell, "Human move while opponent to play");
            return Err(SessionError::NotYourTurn);
        }

        self.state = apply_move(&self.state, cell)?;
        Ok(&self.state)
    }

    /// True when the opponent should be asked for a move now.
    pub fn opponent_due(&self) -> bool {
        self.mode.has_opponent()
            && self.pending.is_none()
            && self.state.outcome() == Outcome::InProgress
            && self.state.turn() == self.opponent_mark
    }

    /// Marks an opponent request as pending and returns its ticket.
    ///
    /// Returns `None` if the opponent is not due, which includes the case of
    /// a request already outstanding for this turn.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn request_opponent_move(&mut self) -> Option<OpponentTicket> {
        if !self.opponent_due() {
            return None;
        }
        self.requests += 1;
        self.pending = Some(self.requests);
        debug!(request = self.requests, "Opponent move requested");
        Some(OpponentTicket::new(
            self.generation,
            self.requests,
            *self.state.board(),
            self.opponent_mark,
            self.human_mark,
        ))
    }

    /// Applies an opponent reply if it answers the outstanding request.
    #[instrument(
        skip(self, ticket),
        fields(
            ticket_generation = ticket.generation,
            request = ticket.request,
            generation = self.generation
        )
    )]
    pub fn resolve_opponent_move(
        &mut self,
        ticket: &OpponentTicket,
        cell: Option<usize>,
    ) -> Resolution {
        if ticket.generation != self.generation || self.pending != Some(ticket.request) {
            debug!(?cell, "Discarding stale opponent move");
            return Resolution::Stale;
        }
        self.pending = None;

        let Some(cell) = cell else {
            debug!("Opponent had no move");
            return Resolution::NoMove;
        };

        match apply_move(&self.state, cell) {
            Ok(next) => {
                self.state = next;
                Resolution::Applied(next)
            }
            Err(e) => {
                warn!(cell, error = %e, "Opponent move rejected");
                Resolution::Rejected(e)
            }
        }
    }

    /// Status line for the front end.
    pub fn status_line(&self) -> String {
        match self.state.outcome() {
            Outcome::Draw => "Draw!".to_string(),
            Outcome::Won(mark) => {
                if self.mode.has_opponent() && mark == self.opponent_mark {
                    format!("Winner: {} (AI)", mark)
                } else {
                    format!("Winner: {}", mark)
                }
            }
            Outcome::InProgress => match self.mode {
                Mode::HumanVsOpponent if self.thinking() => "AI is thinking...".to_string(),
                Mode::HumanVsOpponent => format!("Your turn ({})", self.human_mark),
                Mode::HumanVsHuman => format!("Current turn: {}", self.state.turn()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvai() -> DuelSession {
        DuelSession::new(Mode::HumanVsOpponent, Mark::X, Mark::O)
    }

    #[test]
    fn test_human_blocked_on_opponent_turn() {
        let mut session = pvai();
        session.play(0).unwrap();
        assert_eq!(session.play(1), Err(SessionError::NotYourTurn));
    }

    #[test]
    fn test_single_outstanding_request() {
        let mut session = pvai();
        session.play(0).unwrap();
        assert!(session.request_opponent_move().is_some());
        assert!(session.thinking());
        assert!(session.request_opponent_move().is_none());
    }

    #[test]
    fn test_restart_invalidates_ticket() {
        let mut session = pvai();
        session.play(0).unwrap();
        let ticket = session.request_opponent_move().unwrap();
        session.restart();
        assert!(!session.thinking());
        assert_eq!(session.resolve_opponent_move(&ticket, Some(4)), Resolution::Stale);
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn test_pvp_never_asks_opponent() {
        let mut session = DuelSession::new(Mode::HumanVsHuman, Mark::X, Mark::O);
        session.play(0).unwrap();
        assert!(!session.opponent_due());
        session.play(1).unwrap();
        assert_eq!(session.status_line(), "Current turn: X");
    }

    #[test]
    fn test_engine_error_passes_through() {
        let mut session = DuelSession::new(Mode::HumanVsHuman, Mark::X, Mark::O);
        session.play(0).unwrap();
        assert!(matches!(session.play(0), Err(SessionError::Move(e)) if e.is_recoverable()));
    }
}
