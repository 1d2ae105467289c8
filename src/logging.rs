//! Tracing subscriber setup.
//!
//! The interactive front-end owns the terminal, so logs only reach a file
//! there. Batch mode may log to stderr when no file is configured.

use crate::config::LogConfig;
use crate::error::{AppError, ConfigError};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Env var that overrides `log.filter`.
pub const LOG_ENV_VAR: &str = "AUTOSUGGEST_LOG";

/// Where log lines end up for a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    File,
    Stderr,
    Disabled,
}

/// Pick the sink for `config` given whether the terminal UI is active.
pub fn log_sink(config: &LogConfig, interactive: bool) -> LogSink {
    match (&config.file, interactive) {
        (Some(_), _) => LogSink::File,
        (None, false) => LogSink::Stderr,
        (None, true) => LogSink::Disabled,
    }
}

/// Build the env filter: `AUTOSUGGEST_LOG` first, then the configured directive.
pub fn build_filter<FEnv>(config: &LogConfig, env_lookup: FEnv) -> Result<EnvFilter, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let directive = env_lookup(LOG_ENV_VAR)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| config.filter.clone());
    EnvFilter::try_new(&directive).map_err(|e| {
        ConfigError::Invalid(format!("invalid log filter `{directive}`: {e}"))
    })
}

/// Install the global subscriber.
///
/// A subscriber that is already installed (tests, embedding) is left alone.
pub fn init_logging(config: &LogConfig, interactive: bool) -> Result<(), AppError> {
    let sink = log_sink(config, interactive);
    if sink == LogSink::Disabled {
        return Ok(());
    }
    let filter = build_filter(config, |name| std::env::var(name).ok())?;

    let installed = match (sink, &config.file) {
        (LogSink::File, Some(path)) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init()
        }
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
    };
    if installed.is_ok() {
        tracing::debug!(?sink, "logging initialized");
    }
    Ok(())
}
