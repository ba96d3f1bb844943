//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. The outcome is always derived
//! from the squares, never tracked separately.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use super::types::{Board, Outcome};
use tracing::{instrument, trace};

/// Evaluates the board: a completed line wins, a full board draws.
///
/// When more than one line is complete, the first in [`crate::LINES`] order
/// is reported. Legal play never produces completed lines for both marks.
#[instrument(skip(board), ret(level = "trace"))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Won(winner);
    }
    if is_full(board) {
        trace!("Board full with no winner");
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_diagonal_win_on_busy_board() {
        let board: Board = "XXO OX. ..X".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_draw() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
        let board: Board = "XO. ... ...".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_first_line_reported() {
        // Unreachable board with both marks complete; row 0 (O) precedes row 1 (X).
        let board: Board = "OOO XXX ...".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::O));
    }

    #[test]
    fn test_idempotent() {
        let board: Board = "XO. .X. O..".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), evaluate_outcome(&board));
    }
}
