//! Environment overrides.
//!
//! `AUTOSUGGEST_*` variables override file values; the conventional
//! `NO_COLOR` switch is honored as well.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(raw) = non_empty(env_lookup, "AUTOSUGGEST_DEBOUNCE_MS") {
        let parsed = raw.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid AUTOSUGGEST_DEBOUNCE_MS value `{raw}`: expected integer milliseconds"
            ))
        })?;
        config.suggest.debounce_ms = parsed;
    }
    if let Some(path) = non_empty(env_lookup, "AUTOSUGGEST_CORPUS") {
        config.suggest.corpus_file = Some(PathBuf::from(path));
    }
    if non_empty(env_lookup, "AUTOSUGGEST_NO_COLOR").is_some()
        || non_empty(env_lookup, "NO_COLOR").is_some()
    {
        config.display.color = false;
    }
    Ok(())
}

/// Trimmed env value, treating blank strings as unset.
fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
