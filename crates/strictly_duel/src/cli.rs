//! Command-line interface for strictly_duel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_duel::Mode;

/// Strictly Duel - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_duel")]
#[command(about = "Tic-tac-toe against a friend or a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Game mode
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Seed for the opponent's random picks
        #[arg(long)]
        seed: Option<u64>,

        /// Opponent pacing delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the heuristic opponent's pick for a board
    Suggest {
        /// Board layout, e.g. "XX. .O. ..." or "X/--/O, --/X/--, --/--/--"
        board: String,

        /// Mark to pick for (defaults to whoever moves next)
        #[arg(long)]
        mark: Option<String>,

        /// Seed for the random corner and fallback picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the chat snapshot for a board as JSON
    Snapshot {
        /// Board layout
        board: String,

        /// Mark played by the person chatting
        #[arg(long, default_value = "X")]
        user_mark: String,
    },
}
