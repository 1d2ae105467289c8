//! CLI entry point for autosuggest.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    if let Err(e) = app::run(args).await {
        tracing::error!(error = %e, "autosuggest failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
