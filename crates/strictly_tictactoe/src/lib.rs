//! Pure tic-tac-toe rules engine and heuristic move advisor.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Mark`], [`Square`], [`Outcome`], [`GameState`]
//! - **Rules**: [`evaluate_outcome`] derives the outcome from a board
//! - **Game**: [`create_game`] and [`apply_move`] are the only way to advance a game
//! - **Advisor**: [`choose_move`] picks a square for a computer-controlled mark
//!
//! Everything here is synchronous and free of I/O. The one source of
//! randomness, the advisor's corner and fallback picks, is injected through
//! [`CellChooser`].
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Advisor, Mark, Outcome, apply_move, create_game};
//!
//! let game = create_game();
//! let game = apply_move(&game, 0).unwrap();
//!
//! let mut advisor = Advisor::seeded(42);
//! let reply = advisor.choose_move(game.board(), Mark::O, Mark::X).unwrap();
//! assert_eq!(reply, 4);
//!
//! let game = apply_move(&game, reply).unwrap();
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! assert_eq!(game.status_text(), "current turn: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advisor;
mod error;
mod game;
mod lines;
mod rules;
mod types;

pub use advisor::{Advisor, CellChooser, RngChooser, Rule, Suggestion, choose_move, suggest};
pub use error::{BoardParseError, InvalidMove, MoveError};
pub use game::{apply_move, create_game};
pub use lines::{LINES, Line};
pub use rules::{check_winner, evaluate_outcome, is_full};
pub use types::{Board, CELLS, GameState, Mark, Outcome, Square};
