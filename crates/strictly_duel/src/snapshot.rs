//! Read-only game snapshot for a chat collaborator.
//!
//! A commentary or hint service sees the board and the status line, nothing
//! more. The board is rendered row by row as `cell/cell/cell` with `--` for
//! an empty square, and rows are joined with `", "`:
//!
//! ```text
//! X/--/O, --/X/--, --/--/--
//! ```

use crate::session::DuelSession;
use derive_getters::Getters;
use serde::Serialize;
use strictly_tictactoe::{Board, Mark};

/// What a chat collaborator is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct AdvisorySnapshot {
    /// Board in row notation.
    board: String,
    /// Status line as shown to the player.
    status: String,
    /// Mark played by the person chatting.
    user_mark: Mark,
    /// Mark played by the heuristic opponent.
    ai_mark: Mark,
}

impl AdvisorySnapshot {
    /// Captures a session as the front end currently shows it.
    pub fn from_session(session: &DuelSession) -> Self {
        Self {
            board: board_notation(session.state().board()),
            status: session.status_line(),
            user_mark: session.human_mark(),
            ai_mark: session.opponent_mark(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Renders a board in row notation.
pub fn board_notation(board: &Board) -> String {
    board
        .squares()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|square| square.mark().map_or_else(|| "--".to_string(), |m| m.to_string()))
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
