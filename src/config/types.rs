//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Loading and precedence live
//! in the sibling modules.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_HEADING, DEFAULT_HINT, DEFAULT_LOG_FILTER,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suggest: SuggestConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Config {
    /// Quiet interval before a query settles.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.suggest.debounce_ms)
    }

    /// Where the candidate corpus comes from.
    pub fn corpus_source(&self) -> CorpusSource {
        match &self.suggest.corpus_file {
            Some(path) => CorpusSource::File(path.clone()),
            None => CorpusSource::Sample,
        }
    }
}

/// Suggestion pipeline settings under `[suggest]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Quiet interval in milliseconds.
    pub debounce_ms: u64,
    /// Newline-delimited corpus file. Relative paths resolve against the
    /// directory of the config file that set them.
    pub corpus_file: Option<PathBuf>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            corpus_file: None,
        }
    }
}

/// Display / rendering preferences, consumed only by the terminal front-end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub heading: String,
    pub hint: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            heading: DEFAULT_HEADING.to_string(),
            hint: DEFAULT_HINT.to_string(),
        }
    }
}

/// Logging settings under `[log]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; without one, logs are only written in batch mode (stderr).
    pub file: Option<PathBuf>,
    /// `tracing-subscriber` env-filter directive.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Resolved corpus origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// Built-in demo corpus.
    Sample,
    File(PathBuf),
}

/// Outcome of `autosuggest init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
    Overwritten { path: PathBuf, backup_path: PathBuf },
}
