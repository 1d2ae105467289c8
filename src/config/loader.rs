//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::MAX_DEBOUNCE_MS;
use super::env::apply_env_overrides;
use super::init::config_root_dir;
use super::sources::{read_config_text_with_sources, ConfigSource};
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    resolve_relative_paths(&mut config, &source);
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    tracing::debug!(?source, debounce_ms = config.suggest.debounce_ms, "config loaded");
    Ok(config)
}

/// Anchor relative file paths at the directory of the file that named them.
fn resolve_relative_paths(config: &mut Config, source: &ConfigSource) {
    let Some(base) = source.base_dir().filter(|dir| !dir.as_os_str().is_empty()) else {
        return;
    };
    for path in [&mut config.suggest.corpus_file, &mut config.log.file]
        .into_iter()
        .flatten()
    {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.suggest.debounce_ms > MAX_DEBOUNCE_MS {
        return Err(ConfigError::Invalid(format!(
            "suggest.debounce_ms must be at most {MAX_DEBOUNCE_MS}, got {}",
            config.suggest.debounce_ms
        )));
    }
    if config
        .suggest
        .corpus_file
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err(ConfigError::Invalid(
            "suggest.corpus_file must not be empty".to_string(),
        ));
    }
    Ok(())
}
