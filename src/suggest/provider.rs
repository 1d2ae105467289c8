//! Candidate corpus providers.
//!
//! The session only depends on [`CandidateProvider`], so the corpus can come
//! from memory, a file, or any asynchronous source without changing how
//! suggestions are computed.

use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Built-in demo corpus.
pub const SAMPLE_CORPUS: [&str; 17] = [
    "what is react",
    "what is functional component",
    "what is the difference between class and functional components",
    "what is react hooks",
    "why do we need fragment",
    "why do we use react hooks",
    "how do you use HOC component",
    "how do you create a React app",
    "how do you create an event",
    "explain how lits work",
    "explain the lifecycle methods of components",
    "explain the use of css modules",
    "how is react different from react native",
    "how is react different from angular",
    "what are the components in React",
    "what are synthetic events in React",
    "what are the differences between state and props",
];

/// Source of the finite candidate corpus.
#[async_trait]
pub trait CandidateProvider: Send + Sync {
    /// Retrieve the full, ordered corpus.
    async fn candidates(&self) -> Result<Vec<String>, ProviderError>;
}

/// Fixed in-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidates {
    items: Vec<String>,
}

impl StaticCandidates {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Provider backed by [`SAMPLE_CORPUS`].
    pub fn sample() -> Self {
        Self::new(SAMPLE_CORPUS)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl CandidateProvider for StaticCandidates {
    async fn candidates(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.items.clone())
    }
}

/// Corpus read from a UTF-8 text file, one candidate per line.
///
/// The file is re-read on every fetch so edits show up on the next settled
/// query.
#[derive(Debug, Clone)]
pub struct FileCandidates {
    path: PathBuf,
}

impl FileCandidates {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CandidateProvider for FileCandidates {
    async fn candidates(&self) -> Result<Vec<String>, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let items = parse_corpus_lines(&raw);
        tracing::debug!(path = %self.path.display(), count = items.len(), "loaded corpus file");
        Ok(items)
    }
}

/// Split corpus text into candidates, skipping blank lines.
pub fn parse_corpus_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
