//! Default configuration constants.

/// Embedded default `autosuggest.toml` template written by `autosuggest init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/autosuggest.toml");
/// Config file name looked up locally and under the global config dir.
pub(super) const CONFIG_FILE_NAME: &str = "autosuggest.toml";
/// Directory name under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "autosuggest";
/// Default quiet interval before a query settles.
pub(super) const DEFAULT_DEBOUNCE_MS: u64 = 250;
/// Upper bound accepted for `suggest.debounce_ms`.
pub(super) const MAX_DEBOUNCE_MS: u64 = 10_000;
pub(super) const DEFAULT_HEADING: &str = "Type to test";
pub(super) const DEFAULT_HINT: &str = "Eg: 'what is' | 'react' | 'how' ...";
pub(super) const DEFAULT_LOG_FILTER: &str = "warn";
