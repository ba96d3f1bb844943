//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who plays the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mode {
    /// Two people share the keyboard.
    #[default]
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    #[strum(serialize = "Player vs Player")]
    HumanVsHuman,

    /// The second mark is played by the heuristic opponent.
    #[serde(rename = "pvai")]
    #[value(name = "pvai")]
    #[strum(serialize = "Player vs AI")]
    HumanVsOpponent,
}

impl Mode {
    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsOpponent,
            Mode::HumanVsOpponent => Mode::HumanVsHuman,
        }
    }

    /// True when the heuristic opponent is in play.
    pub fn has_opponent(self) -> bool {
        matches!(self, Mode::HumanVsOpponent)
    }
}
