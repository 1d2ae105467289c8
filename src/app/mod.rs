//! Binary-local application orchestration.
//!
//! `main.rs` only parses arguments; this module wires config, logging, the
//! candidate provider, and one of the two front-ends together.

pub(crate) mod batch;
pub(crate) mod init_flow;
pub(crate) mod interactive;
pub(crate) mod startup;

use crate::cli::{Args, Command};
use autosuggest::config::load_config;
use autosuggest::error::AppError;
use autosuggest::logging::init_logging;
use autosuggest::session::SessionOptions;
use autosuggest::tui::{stdin_is_tty, Renderer};
use tokio::io::BufReader;

/// Run the CLI to completion.
pub(crate) async fn run(args: Args) -> Result<(), AppError> {
    if let Some(Command::Init { force }) = args.command {
        return init_flow::run_init(force);
    }

    let mut config = load_config(args.config.as_deref())?;
    startup::apply_cli_overrides(&mut config, &args);
    let interactive = stdin_is_tty();
    init_logging(&config.log, interactive)?;

    let provider = startup::build_provider(&config);
    tracing::info!(
        interactive,
        corpus = ?config.corpus_source(),
        debounce_ms = config.suggest.debounce_ms,
        "starting"
    );

    if !interactive {
        return batch::run_batch(
            provider.as_ref(),
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            args.json,
        )
        .await;
    }

    let renderer = Renderer::new(
        config.display.color,
        config.display.heading.clone(),
        config.display.hint.clone(),
    );
    let options = SessionOptions {
        debounce: config.debounce(),
    };
    if let Some(query) = interactive::run_interactive(provider, options, renderer).await? {
        println!("{query}");
    }
    Ok(())
}
