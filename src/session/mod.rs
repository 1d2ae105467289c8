//! Suggestion session actor.
//!
//! The actor owns the query, the debounce timer, and the suggestion list.
//! Front-ends push raw key and click commands through one persistent
//! [`SessionHandle`] and observe [`RenderState`] snapshots through a watch
//! channel; handlers always read the live state, so nothing needs to be
//! re-subscribed when the selection moves.

use crate::error::{AppError, ProviderError};
use crate::suggest::{CandidateProvider, Selection, DEFAULT_DEBOUNCE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;

mod autocomplete;
mod key;

pub use autocomplete::{Autocomplete, FetchRequest, Submission};
pub use key::Key;

/// Everything a render surface needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    pub query: String,
    /// Caret position in chars.
    pub cursor: usize,
    pub suggestions: Vec<String>,
    pub selection: Selection,
}

impl RenderState {
    /// Selected row as an integer, `-1` when nothing is selected.
    pub fn selected_index(&self) -> i64 {
        self.selection.as_raw()
    }
}

/// Control commands accepted by the session actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCommand {
    Key(Key),
    /// Pointer selection of the suggestion at `index`. With `expected`, the
    /// click is dropped unless the live list still shows that text there.
    Click {
        index: usize,
        expected: Option<String>,
    },
    Shutdown,
}

/// Messages on the actor's single inbound queue.
enum Inbound {
    Command(SessionCommand),
    Submit(oneshot::Sender<Submission>),
}

/// Tunables for a spawned session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Quiet interval before a query settles.
    pub debounce: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Handle for sending commands to a spawned session actor.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Inbound>,
}

impl SessionHandle {
    /// Send one command to the session actor.
    pub async fn send(&self, command: SessionCommand) -> Result<(), AppError> {
        self.commands
            .send(Inbound::Command(command))
            .await
            .map_err(|_| AppError::SessionClosed)
    }

    /// Press Enter and report what the actor did with it.
    ///
    /// The request is queued behind every command sent before it, so the
    /// answer reflects all earlier keys rather than the last published frame.
    pub async fn submit(&self) -> Result<Submission, AppError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Inbound::Submit(reply_tx))
            .await
            .map_err(|_| AppError::SessionClosed)?;
        reply_rx.await.map_err(|_| AppError::SessionClosed)
    }

    /// True once the actor has stopped.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// Render-state stream returned by [`spawn_session`].
pub type RenderStream = watch::Receiver<RenderState>;

struct FetchDone {
    generation: u64,
    result: Result<Vec<String>, ProviderError>,
}

/// Spawn a session actor over `provider`.
///
/// The actor exits on [`SessionCommand::Shutdown`] or when every handle is
/// dropped.
pub fn spawn_session(
    provider: Arc<dyn CandidateProvider>,
    options: SessionOptions,
) -> (SessionHandle, RenderStream) {
    let (command_tx, mut command_rx) = mpsc::channel::<Inbound>(64);
    let (state_tx, state_rx) = watch::channel(RenderState::default());

    tokio::spawn(async move {
        let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchDone>();
        let mut session = Autocomplete::new(options.debounce);
        tracing::debug!(debounce_ms = options.debounce.as_millis() as u64, "session started");

        loop {
            let deadline = session.next_deadline();
            tokio::select! {
                inbound = command_rx.recv() => match inbound {
                    Some(Inbound::Command(SessionCommand::Key(key))) => {
                        let outcome = session.handle_key(key, Instant::now());
                        tracing::trace!(?key, ?outcome, "key handled");
                    }
                    Some(Inbound::Command(SessionCommand::Click { index, expected })) => {
                        if !session.handle_click(index, expected.as_deref(), Instant::now()) {
                            tracing::debug!(index, "click ignored");
                        }
                    }
                    Some(Inbound::Submit(reply)) => {
                        let submission = session.submit(Instant::now());
                        tracing::trace!(?submission, "enter handled");
                        // Caller may have given up waiting.
                        let _ = reply.send(submission);
                    }
                    Some(Inbound::Command(SessionCommand::Shutdown)) | None => break,
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(request) = session.tick(Instant::now()) {
                        spawn_fetch(Arc::clone(&provider), request, fetch_tx.clone());
                    }
                }
                Some(done) = fetch_rx.recv() => {
                    session.apply_fetch(done.generation, done.result);
                }
            }

            let next = session.render_state();
            state_tx.send_if_modified(|current| {
                if *current == next {
                    return false;
                }
                *current = next;
                true
            });
        }

        tracing::debug!("session stopped");
    });

    (SessionHandle { commands: command_tx }, state_rx)
}

/// Run one corpus fetch off the actor loop so slow providers never block keys.
fn spawn_fetch(
    provider: Arc<dyn CandidateProvider>,
    request: FetchRequest,
    done_tx: mpsc::UnboundedSender<FetchDone>,
) {
    tokio::spawn(async move {
        let result = provider.candidates().await;
        let _ = done_tx.send(FetchDone {
            generation: request.generation,
            result,
        });
    });
}
