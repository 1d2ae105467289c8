//! Per-user config location and `autosuggest init`.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use super::GlobalConfigInitResult;

/// Base config directory: `$XDG_CONFIG_HOME`, else `~/.config`, else the
/// platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    resolve_config_root(|name| std::env::var(name).ok(), dirs::home_dir, dirs::config_dir)
}

fn resolve_config_root<FEnv, FHome, FPlatform>(
    env_lookup: FEnv,
    home_dir: FHome,
    platform_dir: FPlatform,
) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
    FHome: FnOnce() -> Option<PathBuf>,
    FPlatform: FnOnce() -> Option<PathBuf>,
{
    env_lookup("XDG_CONFIG_HOME")
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|home| home.join(".config")))
        .or_else(platform_dir)
}

/// `<config root>/autosuggest/autosuggest.toml`.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|root| root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the default template to the per-user config path.
pub fn initialize_default_global_config(
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("no home or XDG config directory to write into".to_string())
    })?;
    initialize_config_at_path(&path, force)
}

/// Write the default template to `path`.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// copied aside before being replaced.
pub fn initialize_config_at_path(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let path_buf = path.to_path_buf();

    if !path.exists() {
        let created = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path);
        return match created {
            Ok(mut file) => {
                file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
                tracing::info!(path = %path.display(), "default config written");
                Ok(GlobalConfigInitResult::Created { path: path_buf })
            }
            // Lost a creation race; treat as already initialized.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Ok(GlobalConfigInitResult::AlreadyInitialized { path: path_buf })
            }
            Err(e) => Err(e.into()),
        };
    }

    if !force {
        return Ok(GlobalConfigInitResult::AlreadyInitialized { path: path_buf });
    }

    let backup_path = free_backup_path(path, unix_seconds());
    std::fs::copy(path, &backup_path)?;
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
    tracing::info!(
        path = %path.display(),
        backup = %backup_path.display(),
        "config overwritten with defaults"
    );
    Ok(GlobalConfigInitResult::Overwritten {
        path: path_buf,
        backup_path,
    })
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// First unused `<name>.<stamp>[.<n>].bak` sibling of `path`.
fn free_backup_path(path: &Path, stamp: u64) -> PathBuf {
    let name = path
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let first = path.with_file_name(format!("{name}.{stamp}.bak"));
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| path.with_file_name(format!("{name}.{stamp}.{n}.bak")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn xdg_wins_over_home() {
        let root = resolve_config_root(
            |name| (name == "XDG_CONFIG_HOME").then(|| " /xdg ".to_string()),
            || Some(PathBuf::from("/home/u")),
            || None,
        );
        assert_eq!(root, Some(PathBuf::from("/xdg")));
    }

    #[test]
    fn blank_xdg_falls_back_to_home_then_platform() {
        let home = resolve_config_root(
            |_| Some(String::new()),
            || Some(PathBuf::from("/home/u")),
            || Some(PathBuf::from("/platform")),
        );
        assert_eq!(home, Some(PathBuf::from("/home/u/.config")));

        let platform = resolve_config_root(|_| None, || None, || Some(PathBuf::from("/platform")));
        assert_eq!(platform, Some(PathBuf::from("/platform")));
    }

    #[test]
    fn backup_paths_never_collide() {
        let dir = TestTempDir::new("config-backup");
        let path = dir.write_text("autosuggest.toml", "x = 1\n");
        let first = free_backup_path(&path, 42);
        assert_eq!(first, dir.child("autosuggest.toml.42.bak"));

        std::fs::write(&first, "old").expect("write backup");
        assert_eq!(
            free_backup_path(&path, 42),
            dir.child("autosuggest.toml.42.1.bak")
        );
    }
}
