//! Strictly Duel - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_duel::{AdvisorySnapshot, DuelConfig, DuelSession, Mode};
use strictly_tictactoe::{Advisor, Board, GameState, Mark};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            seed,
            delay_ms,
            config,
        } => run_play(mode, seed, delay_ms, config).await,
        Command::Suggest { board, mark, seed } => run_suggest(&board, mark.as_deref(), seed),
        Command::Snapshot { board, user_mark } => run_snapshot(&board, &user_mark),
    }
}

/// Run an interactive game
#[instrument]
async fn run_play(
    mode: Option<Mode>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    let base = match config {
        Some(path) => DuelConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => DuelConfig::default(),
    };
    let config = base.with_overrides(mode, delay_ms, seed);
    info!(?config, "Starting game");

    strictly_duel::run(config).await
}

/// Print the advisor's pick for a board
#[instrument]
fn run_suggest(board: &str, mark: Option<&str>, seed: Option<u64>) -> Result<()> {
    let state = GameState::from_board(board.parse::<Board>().context("Parsing board")?);
    if state.outcome().is_terminal() {
        bail!("Game is already over: {}", state.status_text());
    }

    let own = match mark {
        Some(text) => text.parse::<Mark>()?,
        None => state.turn(),
    };
    debug!(%own, "Suggesting move");

    let mut advisor = match seed {
        Some(seed) => Advisor::seeded(seed),
        None => Advisor::from_entropy(),
    };
    match advisor.suggest(state.board(), own, own.opponent()) {
        Some(s) => println!(
            "{}: square {} (key {}) by rule {}",
            own,
            s.cell,
            s.cell + 1,
            s.rule
        ),
        None => println!("No empty square left"),
    }
    Ok(())
}

/// Print the chat snapshot for a board
#[instrument]
fn run_snapshot(board: &str, user_mark: &str) -> Result<()> {
    let state = GameState::from_board(board.parse::<Board>().context("Parsing board")?);
    let user: Mark = user_mark.parse()?;

    let session = DuelSession::resume(Mode::HumanVsHuman, user, user.opponent(), state);
    let snapshot = AdvisorySnapshot::from_session(&session);
    println!("{}", snapshot.to_json()?);
    Ok(())
}
