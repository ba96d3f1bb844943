//! Heuristic opponent for tic-tac-toe.
//!
//! The advisor looks one move ahead and no further. It applies an ordered
//! list of rules and returns the first one that matches:
//!
//! 1. complete a line of its own,
//! 2. block a line the opponent could complete,
//! 3. take the center,
//! 4. take a random empty corner,
//! 5. take a random empty square.
//!
//! The only randomness lives in rules 4 and 5 and is drawn from an injected
//! [`CellChooser`], so a seeded RNG or a closure stub makes play reproducible.
//!
//! The advisor never mutates the board and does not know whose turn it is.
//! Calling it only on the opponent's turn of a live game is the driver's job.

use super::lines::first_open_cell;
use super::types::{Board, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument, warn};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Picks one index from a non-empty candidate list.
pub trait CellChooser {
    /// Returns one of `candidates`, or `None` if it declines to choose.
    fn choose(&mut self, candidates: &[usize]) -> Option<usize>;
}

impl<F> CellChooser for F
where
    F: FnMut(&[usize]) -> Option<usize>,
{
    fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        self(candidates)
    }
}

/// Uniform choice backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngChooser<R> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<StdRng> {
    /// Reproducible chooser for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Chooser seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> CellChooser for RngChooser<R> {
    fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Which rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Completes one of the advisor's own lines.
    Win,
    /// Occupies the square the opponent needs to complete a line.
    Block,
    /// Takes the center square.
    Center,
    /// Takes an empty corner.
    Corner,
    /// Takes any empty square.
    AnyEmpty,
}

/// A chosen square together with the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Board index (0-8).
    pub cell: usize,
    /// Rule that fired.
    pub rule: Rule,
}

/// Runs the decision list and reports the square and rule.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, chooser), fields(%own, %opponent))]
pub fn suggest<C>(board: &Board, own: Mark, opponent: Mark, chooser: &mut C) -> Option<Suggestion>
where
    C: CellChooser + ?Sized,
{
    let suggestion = if let Some(cell) = first_open_cell(board, own) {
        Suggestion {
            cell,
            rule: Rule::Win,
        }
    } else if let Some(cell) = first_open_cell(board, opponent) {
        Suggestion {
            cell,
            rule: Rule::Block,
        }
    } else if board.is_empty(CENTER) {
        Suggestion {
            cell: CENTER,
            rule: Rule::Center,
        }
    } else {
        let corners: Vec<usize> = CORNERS
            .into_iter()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        if !corners.is_empty() {
            Suggestion {
                cell: pick(chooser, &corners),
                rule: Rule::Corner,
            }
        } else {
            let empty = board.empty_cells();
            if empty.is_empty() {
                debug!("Board full, no move");
                return None;
            }
            Suggestion {
                cell: pick(chooser, &empty),
                rule: Rule::AnyEmpty,
            }
        }
    };

    debug!(cell = suggestion.cell, rule = %suggestion.rule, "Advisor chose square");
    Some(suggestion)
}

/// Runs the decision list and returns just the square.
pub fn choose_move<C>(board: &Board, own: Mark, opponent: Mark, chooser: &mut C) -> Option<usize>
where
    C: CellChooser + ?Sized,
{
    suggest(board, own, opponent, chooser).map(|s| s.cell)
}

/// Asks the chooser, falling back to the first candidate if it answers
/// with something outside the list.
fn pick<C>(chooser: &mut C, candidates: &[usize]) -> usize
where
    C: CellChooser + ?Sized,
{
    match chooser.choose(candidates) {
        Some(cell) if candidates.contains(&cell) => cell,
        other => {
            warn!(?other, ?candidates, "Chooser answered outside candidates");
            candidates[0]
        }
    }
}

/// Heuristic opponent that owns its random source.
#[derive(Debug, Clone)]
pub struct Advisor<C> {
    chooser: C,
}

impl<C: CellChooser> Advisor<C> {
    /// Creates an advisor around a chooser.
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    /// See [`suggest`].
    pub fn suggest(&mut self, board: &Board, own: Mark, opponent: Mark) -> Option<Suggestion> {
        suggest(board, own, opponent, &mut self.chooser)
    }

    /// See [`choose_move`].
    pub fn choose_move(&mut self, board: &Board, own: Mark, opponent: Mark) -> Option<usize> {
        choose_move(board, own, opponent, &mut self.chooser)
    }
}

impl Advisor<RngChooser<StdRng>> {
    /// Advisor with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngChooser::seeded(seed))
    }

    /// Advisor seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(RngChooser::from_entropy())
    }
}
