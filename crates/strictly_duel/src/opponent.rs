//! Paced heuristic opponent.
//!
//! Replies are computed off the input loop on a tokio task, after a short
//! pause so the opponent does not answer instantly. The task never touches
//! the session; it hands `(ticket, cell)` back over a channel and the
//! session decides whether the reply is still current.

use crate::session::OpponentTicket;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strictly_tictactoe::{Advisor, CellChooser};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Advisor shared between opponent tasks.
pub type SharedAdvisor<C> = Arc<Mutex<Advisor<C>>>;

/// Opponent answer for a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentReply {
    /// The request being answered.
    pub ticket: OpponentTicket,
    /// Chosen square, `None` on a full board.
    pub cell: Option<usize>,
}

/// Waits out the pacing delay, then asks the advisor for a square.
#[instrument(skip(advisor), fields(generation = ticket.generation()))]
pub async fn think<C>(
    ticket: OpponentTicket,
    delay: Duration,
    advisor: &SharedAdvisor<C>,
) -> OpponentReply
where
    C: CellChooser,
{
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    // Never held across an await.
    let mut guard = advisor.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let cell = guard.choose_move(ticket.board(), *ticket.own(), *ticket.opponent());
    debug!(?cell, "Opponent decided");

    OpponentReply { ticket, cell }
}

/// Runs [`think`] on a tokio task and sends the reply on `tx`.
pub fn spawn_opponent<C>(
    ticket: OpponentTicket,
    delay: Duration,
    advisor: SharedAdvisor<C>,
    tx: mpsc::UnboundedSender<OpponentReply>,
) -> JoinHandle<()>
where
    C: CellChooser + Send + 'static,
{
    tokio::spawn(async move {
        let reply = think(ticket, delay, &advisor).await;
        if tx.send(reply).is_err() {
            debug!("Reply channel closed, dropping opponent move");
        }
    })
}
