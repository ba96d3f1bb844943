//! Line-based terminal front end.
//!
//! Reads one command per line and redraws the board after every change.
//! Input and the opponent's replies are multiplexed with `tokio::select!`,
//! so a restart typed while the opponent is thinking wins the race and the
//! late reply is discarded by the session.

use crate::config::DuelConfig;
use crate::opponent::{OpponentReply, SharedAdvisor, spawn_opponent};
use crate::session::{DuelSession, Resolution, SessionError};
use anyhow::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};
use strictly_tictactoe::{Advisor, CellChooser};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Keys: 1-9 play a square, r restart, m switch mode, q quit";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the square at this index (0-8).
    Play(usize),
    /// Start a new game.
    Restart,
    /// Toggle between the two modes.
    SwitchMode,
    /// Print the key help.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses a line. Squares are numbered 1-9 on screen.
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "r" | "restart" => Command::Restart,
            "m" | "mode" => Command::SwitchMode,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(n @ 1..=9) => Command::Play(n - 1),
                _ => Command::Unknown,
            },
        }
    }
}

/// Runs an interactive game on stdin/stdout.
pub async fn run(config: DuelConfig) -> Result<()> {
    let advisor = match config.seed() {
        Some(seed) => Advisor::seeded(*seed),
        None => Advisor::from_entropy(),
    };
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    run_with(config, Arc::new(Mutex::new(advisor)), input, &mut output).await
}

/// Runs a game against any line source and sink.
///
/// Returns on `q`, or at end of input once any pending opponent reply has
/// been applied.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub async fn run_with<C, R, W>(
    config: DuelConfig,
    advisor: SharedAdvisor<C>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    C: CellChooser + Send + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = DuelSession::new(
        *config.mode(),
        *config.human_mark(),
        *config.opponent_mark(),
    );
    let (tx, mut rx) = mpsc::unbounded_channel::<OpponentReply>();
    let mut lines = input.lines();
    let mut input_closed = false;

    writeln!(out, "Mode: {}", session.mode())?;
    writeln!(out, "{}", HELP)?;
    render(&session, out)?;

    loop {
        if let Some(ticket) = session.request_opponent_move() {
            writeln!(out, "{}", session.status_line())?;
            spawn_opponent(ticket, config.opponent_delay(), advisor.clone(), tx.clone());
        }

        if input_closed && !session.thinking() {
            debug!("Input closed, leaving game loop");
            break;
        }

        tokio::select! {
            biased;

            Some(reply) = rx.recv() => {
                match session.resolve_opponent_move(&reply.ticket, reply.cell) {
                    Resolution::Applied(_) => render(&session, out)?,
                    Resolution::Stale => debug!("Ignored reply to an earlier request"),
                    Resolution::NoMove => debug!("Opponent passed on a full board"),
                    Resolution::Rejected(e) => warn!(error = %e, "Opponent move refused"),
                }
            }

            line = lines.next_line(), if !input_closed => {
                let Some(line) = line? else {
                    input_closed = true;
                    continue;
                };
                match Command::parse(&line) {
                    Command::Quit => {
                        info!("Player quit");
                        break;
                    }
                    Command::Restart => {
                        session.restart();
                        writeln!(out, "New game.")?;
                        render(&session, out)?;
                    }
                    Command::SwitchMode => {
                        session.set_mode(session.mode().toggle());
                        writeln!(out, "Mode: {}", session.mode())?;
                        render(&session, out)?;
                    }
                    Command::Help => writeln!(out, "{}", HELP)?,
                    Command::Unknown => {
                        writeln!(out, "Unrecognized input {:?}. {}", line.trim(), HELP)?
                    }
                    Command::Play(cell) => match session.play(cell) {
                        Ok(_) => render(&session, out)?,
                        Err(SessionError::NotYourTurn) => writeln!(out, "Not your turn.")?,
                        Err(SessionError::Move(e)) => {
                            debug!(error = %e, "Move rejected");
                            writeln!(out, "{}", e)?;
                        }
                    },
                }
            }

            else => break,
        }
    }

    out.flush()?;
    Ok(())
}

fn render<W: Write>(session: &DuelSession, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.state().board().display())?;
    writeln!(out, "{}", session.status_line())
}
