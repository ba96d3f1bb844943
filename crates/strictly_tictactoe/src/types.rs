//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of squares on the board.
pub const CELLS: usize = 9;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// The mark that opens every game.
    pub const FIRST: Mark = Mark::X;

    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(BoardParseError::UnknownMark(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Option<Mark>> for Square {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Square::Empty, Square::Occupied)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from per-square marks in row-major order.
    pub fn from_marks(marks: [Option<Mark>; CELLS]) -> Self {
        Self {
            squares: marks.map(Square::from),
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Places a square. Callers have already bounds-checked `pos`.
    pub(crate) fn with(mut self, pos: usize, square: Square) -> Self {
        self.squares[pos] = square;
        self
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of every empty square, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a compact layout such as `"XX. ... ..."` or `"X/--/O, --/X/--, --/--/--"`.
///
/// `X`/`O` are marks, `.`, `-` and `_` are empty squares. Whitespace, `/`, `,` and `|`
/// separate tokens, and a token of exactly `--` counts as one empty square.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);

        let tokens = s
            .split(|c: char| c.is_whitespace() || matches!(c, '/' | ',' | '|'))
            .filter(|token| !token.is_empty());
        for token in tokens {
            if token == "--" {
                cells.push(None);
                continue;
            }
            for ch in token.chars() {
                let cell = match ch {
                    'X' | 'x' => Some(Mark::X),
                    'O' | 'o' => Some(Mark::O),
                    '.' | '-' | '_' => None,
                    other => return Err(BoardParseError::UnexpectedChar(other)),
                };
                cells.push(cell);
            }
        }

        let marks: [Option<Mark>; CELLS] = cells
            .try_into()
            .map_err(|cells: Vec<_>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self::from_marks(marks))
    }
}

/// Current outcome of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(Mark),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// True once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Complete game state. Transitions produce a new value; see [`crate::apply_move`].
///
/// Only `Serialize` is derived; the outcome must always agree with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::FIRST,
            outcome: Outcome::InProgress,
        }
    }

    /// Rebuilds the state of an arbitrary position.
    ///
    /// The outcome is evaluated from the board, and X moves whenever both
    /// marks have been placed equally often.
    pub fn from_board(board: Board) -> Self {
        let count = |mark| {
            board
                .squares()
                .iter()
                .filter(|square| square.mark() == Some(mark))
                .count()
        };
        let turn = if count(Mark::X) > count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        };
        Self::from_parts(board, turn, crate::rules::evaluate_outcome(&board))
    }

    pub(crate) fn from_parts(board: Board, turn: Mark, outcome: Outcome) -> Self {
        Self {
            board,
            turn,
            outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Human-readable status for renderers.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("current turn: {}", self.turn),
            Outcome::Won(mark) => format!("winner: {}", mark),
            Outcome::Draw => "draw".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        for mark in <Mark as strum::IntoEnumIterator>::iter() {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
            assert_eq!(mark.to_string().parse::<Mark>(), Ok(mark));
        }
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_chat_notation() {
        let board: Board = "X/--/O, --/X/--, --/--/--".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.get(2), Some(Square::Occupied(Mark::O)));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.empty_cells(), vec![1, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XXXXXXXXXX".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
        assert_eq!(
            "XX?......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('?'))
        );
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_empty(9));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_from_board() {
        let state = GameState::from_board(Board::new());
        assert_eq!(state, GameState::new());

        let state = GameState::from_board("X.. .O. ..X".parse().unwrap());
        assert_eq!(state.turn(), Mark::O);
        assert_eq!(state.outcome(), Outcome::InProgress);

        let state = GameState::from_board("XXX OO. ...".parse().unwrap());
        assert_eq!(state.outcome(), Outcome::Won(Mark::X));
        assert_eq!(state.status_text(), "winner: X");
    }

    #[test]
    fn test_status_text() {
        let state = GameState::new();
        assert_eq!(state.status_text(), "current turn: X");

        let won = GameState::from_parts(Board::new(), Mark::X, Outcome::Won(Mark::O));
        assert_eq!(won.status_text(), "winner: O");

        let draw = GameState::from_parts(Board::new(), Mark::O, Outcome::Draw);
        assert_eq!(draw.status_text(), "draw");
    }
}
