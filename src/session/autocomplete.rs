//! Synchronous session state machine.
//!
//! `Autocomplete` ties the query buffer, debouncer, and selection controller
//! together. It never sleeps or spawns; the caller supplies the current time
//! and runs corpus fetches, which keeps every transition deterministic.

use crate::error::ProviderError;
use crate::suggest::{
    compute_suggestions, Debouncer, KeyOutcome, QueryBuffer, Selection, SelectionController,
};
use std::time::Duration;
use tokio::time::Instant;

use super::key::Key;
use super::RenderState;

/// Corpus fetch requested after the debounced query changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic tag; results for older generations are discarded.
    pub generation: u64,
    /// Settled query the fetch was issued for.
    pub query: String,
}

/// What Enter did, as decided by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The highlighted suggestion became the query.
    Committed(String),
    /// No suggestion was highlighted; this is the query as typed.
    Submitted(String),
}

/// Query, debounced query, and suggestion list for one input session.
#[derive(Debug)]
pub struct Autocomplete {
    query: QueryBuffer,
    debouncer: Debouncer<String>,
    debounced: Option<String>,
    generation: u64,
    list: SelectionController,
}

impl Autocomplete {
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: QueryBuffer::default(),
            debouncer: Debouncer::new(debounce),
            debounced: None,
            generation: 0,
            list: SelectionController::default(),
        }
    }

    pub fn query(&self) -> &QueryBuffer {
        &self.query
    }

    /// Last settled query, `None` before the first quiet period elapses.
    pub fn debounced_query(&self) -> Option<&str> {
        self.debounced.as_deref()
    }

    pub fn suggestions(&self) -> &[String] {
        self.list.suggestions()
    }

    pub fn selection(&self) -> Selection {
        self.list.selection()
    }

    /// When the pending debounce timer fires, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Apply one key press.
    ///
    /// Up/Down navigate while suggestions are visible and otherwise fall back
    /// to caret movement (start/end of the line). The outcome reports whether
    /// the suggestion list consumed the key.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> KeyOutcome {
        match key {
            Key::Up => {
                let outcome = self.list.move_up();
                if outcome == KeyOutcome::Ignored {
                    self.query.move_home();
                }
                outcome
            }
            Key::Down => {
                let outcome = self.list.move_down();
                if outcome == KeyOutcome::Ignored {
                    self.query.move_end();
                }
                outcome
            }
            Key::Enter => match self.list.commit() {
                Some(chosen) => {
                    self.commit_query(&chosen, now);
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                // Hard reset of the visible list only; a pending debounce
                // still fires and may repopulate it.
                let was_active = self.list.is_active();
                self.list.dismiss();
                if was_active {
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Left => {
                self.query.move_left();
                KeyOutcome::Ignored
            }
            Key::Right => {
                self.query.move_right();
                KeyOutcome::Ignored
            }
            Key::Home => {
                self.query.move_home();
                KeyOutcome::Ignored
            }
            Key::End => {
                self.query.move_end();
                KeyOutcome::Ignored
            }
            Key::Char(ch) => self.edit(|query| query.insert(ch), now),
            Key::Backspace => self.edit(QueryBuffer::backspace, now),
            Key::Delete => self.edit(QueryBuffer::delete, now),
            Key::KillToStart => self.edit(QueryBuffer::kill_to_start, now),
            Key::KillToEnd => self.edit(QueryBuffer::kill_to_end, now),
            Key::KillWordBack => self.edit(QueryBuffer::kill_word_back, now),
        }
    }

    /// Commit the suggestion at `index` (pointer click).
    ///
    /// With `expected`, the click only lands if the live list still shows
    /// that text at `index`; a list replaced after the front-end drew it is
    /// left alone. Returns `false` when nothing was committed.
    pub fn handle_click(&mut self, index: usize, expected: Option<&str>, now: Instant) -> bool {
        if let Some(expected) = expected {
            let live = self.list.suggestions().get(index).map(String::as_str);
            if live != Some(expected) {
                tracing::debug!(index, expected, ?live, "click on a replaced list ignored");
                return false;
            }
        }
        match self.list.pointer_select(index) {
            Some(chosen) => {
                self.commit_query(&chosen, now);
                true
            }
            None => false,
        }
    }

    /// Resolve Enter against the live state.
    ///
    /// A highlighted suggestion is committed; otherwise the current query is
    /// handed back as submitted and nothing changes.
    pub fn submit(&mut self, now: Instant) -> Submission {
        match self.handle_key(Key::Enter, now) {
            KeyOutcome::Consumed => Submission::Committed(self.query.text().to_string()),
            KeyOutcome::Ignored => Submission::Submitted(self.query.text().to_string()),
        }
    }

    /// Advance the debounce timer.
    ///
    /// Returns a fetch request when a settled value differs from the previous
    /// debounced query; identical settles do not trigger recomputation.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        let settled = self.debouncer.poll(now)?;
        if self.debounced.as_deref() == Some(settled.as_str()) {
            tracing::trace!(query = %settled, "debounced query unchanged");
            return None;
        }
        self.generation += 1;
        self.debounced = Some(settled.clone());
        tracing::debug!(query = %settled, generation = self.generation, "query settled");
        Some(FetchRequest {
            generation: self.generation,
            query: settled,
        })
    }

    /// Install the result of a corpus fetch.
    ///
    /// Stale generations are dropped and retrieval errors are logged; in both
    /// cases the current list stays untouched. Returns `true` when the list
    /// was replaced.
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, ProviderError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale corpus fetch"
            );
            return false;
        }
        let corpus = match result {
            Ok(corpus) => corpus,
            Err(err) => {
                tracing::warn!(error = %err, "candidate retrieval failed; keeping previous suggestions");
                return false;
            }
        };
        let query = self.debounced.as_deref().unwrap_or_default();
        let suggestions = compute_suggestions(query, &corpus);
        tracing::debug!(query, matches = suggestions.len(), "suggestions recomputed");
        self.list.replace(suggestions);
        true
    }

    /// Snapshot for the render surface.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            query: self.query.text().to_string(),
            cursor: self.query.cursor(),
            suggestions: self.list.suggestions().to_vec(),
            selection: self.list.selection(),
        }
    }

    fn edit<F>(&mut self, apply: F, now: Instant) -> KeyOutcome
    where
        F: FnOnce(&mut QueryBuffer) -> bool,
    {
        if apply(&mut self.query) {
            self.debouncer.push(self.query.text().to_string(), now);
        }
        KeyOutcome::Ignored
    }

    fn commit_query(&mut self, chosen: &str, now: Instant) {
        tracing::debug!(suggestion = chosen, "suggestion committed");
        if self.query.set(chosen) {
            self.debouncer.push(chosen.to_string(), now);
        }
    }
}
