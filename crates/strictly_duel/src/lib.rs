//! Strictly Duel - terminal tic-tac-toe against a friend or a heuristic opponent.
//!
//! # Architecture
//!
//! - **Session**: driver state around the pure engine (mode, pending opponent move, generation)
//! - **Opponent**: paced advisor calls on a tokio task
//! - **Terminal**: line-based front end
//! - **Snapshot**: read-only view for a chat collaborator
//!
//! The rules live in [`strictly_tictactoe`]; nothing here changes them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod mode;
mod opponent;
mod session;
mod snapshot;
mod terminal;

pub use config::{ConfigError, DuelConfig};
pub use mode::Mode;
pub use opponent::{OpponentReply, SharedAdvisor, spawn_opponent, think};
pub use session::{DuelSession, OpponentTicket, Resolution, SessionError};
pub use snapshot::{AdvisorySnapshot, board_notation};
pub use terminal::{Command, run, run_with};
