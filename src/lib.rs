//! Autosuggest: an interactive text-suggestion engine.
//!
//! Given an evolving query string this crate produces a lazily refreshed list
//! of candidate phrases containing the query, and lets a front-end navigate
//! and commit among them with the keyboard or the pointer.
//!
//! # Quick start
//!
//! ```no_run
//! use autosuggest::session::{spawn_session, Key, SessionCommand, SessionOptions};
//! use autosuggest::suggest::StaticCandidates;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let provider = Arc::new(StaticCandidates::sample());
//! let (handle, mut state) = spawn_session(provider, SessionOptions::default());
//! for ch in "what is".chars() {
//!     handle.send(SessionCommand::Key(Key::Char(ch))).await.unwrap();
//! }
//! // The first publish is usually just the echoed keys; wait for the settle.
//! let snapshot = state.wait_for(|s| !s.suggestions.is_empty()).await.unwrap();
//! println!("{:?}", snapshot.suggestions);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod suggest;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
