//! Startup wiring: CLI overrides and provider selection.

use crate::cli::Args;
use autosuggest::config::{Config, CorpusSource};
use autosuggest::suggest::{CandidateProvider, FileCandidates, StaticCandidates};
use std::sync::Arc;

/// Apply CLI flags on top of file and env config.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.corpus {
        config.suggest.corpus_file = Some(path.clone());
    }
    if let Some(ms) = args.debounce_ms {
        config.suggest.debounce_ms = ms;
    }
    if args.no_color {
        config.display.color = false;
    }
}

/// Build the candidate provider named by the config.
pub(crate) fn build_provider(config: &Config) -> Arc<dyn CandidateProvider> {
    match config.corpus_source() {
        CorpusSource::Sample => Arc::new(StaticCandidates::sample()),
        CorpusSource::File(path) => Arc::new(FileCandidates::new(path)),
    }
}
