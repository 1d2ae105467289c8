//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`AUTOSUGGEST_DEBOUNCE_MS`, `AUTOSUGGEST_CORPUS`,
//!    `AUTOSUGGEST_NO_COLOR` / `NO_COLOR`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./autosuggest.toml in the current directory
//! 5. $XDG_CONFIG_HOME/autosuggest/autosuggest.toml (or ~/.config/...)
//! 6. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{
    config_root_dir, default_global_config_path, initialize_config_at_path,
    initialize_default_global_config,
};
pub use loader::load_config;
pub use types::{
    Config, CorpusSource, DisplayConfig, GlobalConfigInitResult, LogConfig, SuggestConfig,
};
