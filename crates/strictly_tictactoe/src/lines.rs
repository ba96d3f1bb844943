//! The eight winning lines and helpers for scanning them.

use super::types::{Board, Mark, Square};

/// A winning line: three square indices.
pub type Line = [usize; 3];

/// Winning lines in scan order: rows top-to-bottom, columns left-to-right,
/// then the two diagonals. Earlier lines take precedence when several match.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Returns the mark filling all three squares of `line`, if any.
pub fn completed_by(board: &Board, line: &Line) -> Option<Mark> {
    let [a, b, c] = line.map(|idx| board.get(idx));
    match a {
        Some(Square::Occupied(mark)) if a == b && b == c => Some(mark),
        _ => None,
    }
}

/// Returns the empty square of `line` when the other two hold `mark`.
pub fn open_cell(board: &Board, line: &Line, mark: Mark) -> Option<usize> {
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in line {
        match board.get(idx)? {
            Square::Empty => {
                if empty_pos.is_some() {
                    return None;
                }
                empty_pos = Some(idx);
            }
            Square::Occupied(m) if m == mark => count += 1,
            Square::Occupied(_) => return None,
        }
    }

    if count == 2 { empty_pos } else { None }
}

/// First line in scan order that `mark` can complete next move.
pub fn first_open_cell(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| open_cell(board, line, mark))
}
