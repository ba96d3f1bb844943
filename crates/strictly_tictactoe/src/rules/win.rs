//! Win detection logic for tic-tac-toe.

use super::super::lines::{LINES, completed_by};
use super::super::types::{Board, Mark};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line in scan order whose three
/// squares hold the same mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| completed_by(board, line))
}
