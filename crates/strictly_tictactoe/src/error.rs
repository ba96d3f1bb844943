//! Error types for the rules engine.

use derive_more::{Display, Error};

/// Why an in-range move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The game already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),
}

/// Error returned by [`crate::apply_move`].
///
/// `OutOfRange` means the caller offered an index the board does not have and
/// is an integration bug. `InvalidMove` is the ordinary rejection a front end
/// can ignore. Either way the input state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Move on an occupied square or after the game ended.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(not(source))] InvalidMove),
}

impl MoveError {
    /// True for rejections a correct driver may simply ignore.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MoveError::InvalidMove(_))
    }
}

/// Error parsing a board layout or mark from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Layout did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// Character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board layout", _0)]
    UnexpectedChar(#[error(not(source))] char),

    /// Text that does not name a mark.
    #[display("Unknown mark {:?} (expected X or O)", _0)]
    UnknownMark(#[error(not(source))] String),
}
