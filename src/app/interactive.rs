//! Full-screen interactive front-end.
//!
//! A blocking thread decodes terminal events; this task forwards them to the
//! session actor and repaints whenever a new render state is published.

use autosuggest::error::AppError;
use autosuggest::session::{spawn_session, SessionCommand, SessionOptions, Submission};
use autosuggest::suggest::CandidateProvider;
use autosuggest::tui::{pump_events, Renderer, Screen, TerminalGuard, UiInput};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run until the user submits or quits.
///
/// Returns the submitted query, or `None` when the user quit.
pub(crate) async fn run_interactive(
    provider: Arc<dyn CandidateProvider>,
    options: SessionOptions,
    renderer: Renderer,
) -> Result<Option<String>, AppError> {
    let (session, mut state) = spawn_session(provider, options);
    let guard = TerminalGuard::acquire()?;
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<UiInput>();
    let pump = tokio::task::spawn_blocking(move || pump_events(input_tx));

    let mut stderr = io::stderr();
    let mut screen = Screen::measure();
    // Clicks are mapped against what is on screen, not the newest state.
    let mut drawn = state.borrow_and_update().clone();
    screen.draw(&renderer, &mut stderr, &drawn)?;

    let outcome: Result<Option<String>, AppError> = loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break Err(AppError::SessionClosed);
                }
                drawn = state.borrow_and_update().clone();
                screen.draw(&renderer, &mut stderr, &drawn)?;
            }
            input = input_rx.recv() => {
                let Some(input) = input else {
                    // Reader thread ended; its result is inspected below.
                    break Ok(None);
                };
                match input {
                    UiInput::Key(key) => session.send(SessionCommand::Key(key)).await?,
                    UiInput::Enter => match session.submit().await? {
                        Submission::Submitted(query) => break Ok(Some(query)),
                        Submission::Committed(query) => {
                            tracing::debug!(%query, "suggestion committed");
                        }
                    },
                    UiInput::Click { row } => {
                        if let Some(index) = screen.suggestion_at_row(row, &drawn) {
                            let expected = drawn.suggestions.get(index).cloned();
                            session
                                .send(SessionCommand::Click { index, expected })
                                .await?;
                        }
                    }
                    UiInput::Resize => {
                        screen = Screen::measure();
                        drawn = state.borrow_and_update().clone();
                        screen.draw(&renderer, &mut stderr, &drawn)?;
                    }
                    UiInput::Quit => break Ok(None),
                }
            }
        }
    };

    drop(input_rx);
    let _ = session.send(SessionCommand::Shutdown).await;
    drop(guard);
    match pump.await {
        Ok(Err(err)) => return Err(AppError::Io(err)),
        Err(err) => tracing::warn!(error = %err, "terminal event reader panicked"),
        Ok(Ok(())) => {}
    }
    outcome
}
