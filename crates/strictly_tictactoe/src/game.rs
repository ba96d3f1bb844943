//! State transitions for tic-tac-toe.
//!
//! A [`GameState`] is a value. [`apply_move`] borrows the current state and
//! returns the next one, so callers keep the previous state for free and a
//! rejected move can never leave a half-applied board behind.

use super::error::{InvalidMove, MoveError};
use super::rules::evaluate_outcome;
use super::types::{CELLS, GameState, Square};
use tracing::{debug, instrument};

/// Returns a fresh game: empty board, first mark to move, in progress.
#[instrument]
pub fn create_game() -> GameState {
    GameState::new()
}

/// Places the current mark at `cell` and returns the resulting state.
///
/// Checks run in order: range, terminal state, occupancy. The turn flips on
/// every accepted move, including the one that ends the game.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `cell` is not in 0-8.
/// - [`MoveError::InvalidMove`] if the game is over or the square is taken.
#[instrument(skip(state), fields(turn = %state.turn(), outcome = ?state.outcome()))]
pub fn apply_move(state: &GameState, cell: usize) -> Result<GameState, MoveError> {
    if cell >= CELLS {
        debug!(cell, "Rejected out-of-range move");
        return Err(MoveError::OutOfRange(cell));
    }
    if state.outcome().is_terminal() {
        debug!(cell, "Rejected move after game end");
        return Err(MoveError::InvalidMove(InvalidMove::GameOver));
    }
    if !state.board().is_empty(cell) {
        debug!(cell, "Rejected move on occupied square");
        return Err(MoveError::InvalidMove(InvalidMove::SquareOccupied(cell)));
    }

    let mark = state.turn();
    let board = state.board().with(cell, Square::Occupied(mark));
    let outcome = evaluate_outcome(&board);
    debug!(cell, %mark, ?outcome, "Move applied");

    Ok(GameState::from_parts(board, mark.opponent(), outcome))
}

impl GameState {
    /// Method form of [`apply_move`].
    pub fn apply_move(&self, cell: usize) -> Result<GameState, MoveError> {
        apply_move(self, cell)
    }
}
