//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Interactive phrase suggestions for the terminal.
#[derive(Debug, Parser)]
#[command(name = "autosuggest", version)]
pub struct Args {
    /// Path to config file (default: ./autosuggest.toml or
    /// ~/.config/autosuggest/autosuggest.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Newline-delimited corpus file; overrides the configured corpus.
    #[arg(long = "corpus", value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Override the debounce interval in milliseconds.
    #[arg(long = "debounce-ms", value_name = "N")]
    pub debounce_ms: Option<u64>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Batch mode only: print one JSON render state per input line.
    #[arg(long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the default config to ~/.config/autosuggest/autosuggest.toml.
    Init {
        /// Overwrite an existing file after backing it up.
        #[arg(long = "force")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn overrides_parse() {
        let args = Args::parse_from([
            "autosuggest",
            "--corpus",
            "phrases.txt",
            "--debounce-ms",
            "40",
            "--no-color",
            "--json",
        ]);
        assert_eq!(args.corpus, Some(PathBuf::from("phrases.txt")));
        assert_eq!(args.debounce_ms, Some(40));
        assert!(args.no_color);
        assert!(args.json);
        assert!(args.command.is_none());
    }

    #[test]
    fn init_subcommand_parses_force() {
        let args = Args::parse_from(["autosuggest", "init", "--force"]);
        assert!(matches!(args.command, Some(Command::Init { force: true })));
    }

    #[test]
    fn debounce_must_be_numeric() {
        assert!(Args::try_parse_from(["autosuggest", "--debounce-ms", "soon"]).is_err());
    }
}
