//! Tests for the rules engine across every reachable game.

use std::collections::HashSet;
use strictly_tictactoe::{
    Board, GameState, InvalidMove, LINES, Mark, MoveError, Outcome, Square, apply_move,
    create_game, evaluate_outcome,
};

/// Every state reachable from a fresh game through legal moves.
fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![create_game()];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        states.push(state);
        for cell in state.board().empty_cells() {
            if let Ok(next) = apply_move(&state, cell) {
                stack.push(next);
            }
        }
    }
    states
}

fn marks_completing_a_line(board: &Board) -> HashSet<Mark> {
    LINES
        .iter()
        .filter_map(|line| match line.map(|i| board.get(i)) {
            [Some(Square::Occupied(a)), Some(Square::Occupied(b)), Some(Square::Occupied(c))]
                if a == b && b == c =>
            {
                Some(a)
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_fresh_game() {
    let game = create_game();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_reachable_state_count() {
    // 5478 distinct legal positions, the standard count for 3x3 tic-tac-toe.
    assert_eq!(reachable_states().len(), 5478);
}

#[test]
fn test_never_two_winning_marks() {
    for state in reachable_states() {
        assert!(marks_completing_a_line(state.board()).len() <= 1);
    }
}

#[test]
fn test_outcome_matches_board() {
    for state in reachable_states() {
        let outcome = evaluate_outcome(state.board());
        assert_eq!(outcome, state.outcome());
        assert_eq!(outcome, evaluate_outcome(state.board()));

        match outcome {
            Outcome::Won(mark) => {
                assert!(marks_completing_a_line(state.board()).contains(&mark));
            }
            Outcome::Draw => {
                assert!(state.board().is_full());
                assert!(marks_completing_a_line(state.board()).is_empty());
            }
            Outcome::InProgress => {
                assert!(!state.board().is_full());
                assert!(marks_completing_a_line(state.board()).is_empty());
            }
        }
    }
}

#[test]
fn test_terminal_states_reject_every_square() {
    for state in reachable_states()
        .into_iter()
        .filter(|s| s.outcome().is_terminal())
    {
        for cell in 0..9 {
            assert_eq!(
                apply_move(&state, cell),
                Err(MoveError::InvalidMove(InvalidMove::GameOver))
            );
        }
    }
}

#[test]
fn test_apply_move_is_a_value_transform() {
    for state in reachable_states().into_iter().take(500) {
        let before = state;
        for cell in state.board().empty_cells() {
            let Ok(next) = apply_move(&state, cell) else {
                continue;
            };
            assert_eq!(state, before);
            for idx in 0..9 {
                if idx == cell {
                    assert_eq!(next.board().get(idx), Some(Square::Occupied(state.turn())));
                } else {
                    assert_eq!(next.board().get(idx), state.board().get(idx));
                }
            }
        }
    }
}

#[test]
fn test_turn_alternates_from_x() {
    let mut game = create_game();
    let mut placed = Vec::new();
    for cell in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        let mover = game.turn();
        game = apply_move(&game, cell).expect("legal move");
        placed.push(mover);
        assert_eq!(game.board().get(cell), Some(Square::Occupied(mover)));
    }
    let expected: Vec<Mark> = (0..9)
        .map(|n| if n % 2 == 0 { Mark::X } else { Mark::O })
        .collect();
    assert_eq!(placed, expected);
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_failed_move_leaves_state_untouched() {
    let game = apply_move(&create_game(), 4).unwrap();
    let snapshot = game;

    assert_eq!(
        apply_move(&game, 4),
        Err(MoveError::InvalidMove(InvalidMove::SquareOccupied(4)))
    );
    assert_eq!(apply_move(&game, 42), Err(MoveError::OutOfRange(42)));
    assert_eq!(game, snapshot);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::OutOfRange(9).to_string(),
        "Position 9 out of bounds (must be 0-8)"
    );
    assert_eq!(
        MoveError::InvalidMove(InvalidMove::SquareOccupied(3)).to_string(),
        "Invalid move: Square 3 is already occupied"
    );
}

#[test]
fn test_state_serializes_for_snapshots() {
    let game = apply_move(&create_game(), 0).unwrap();
    let json = serde_json::to_value(game).unwrap();
    assert_eq!(json["turn"], "O");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["squares"][0]["Occupied"], "X");
    assert_eq!(json["board"]["squares"][1], "Empty");
}
