//! `autosuggest init` orchestration.

use autosuggest::config::{initialize_default_global_config, GlobalConfigInitResult};
use autosuggest::error::AppError;

pub(crate) fn run_init(force: bool) -> Result<(), AppError> {
    let result = initialize_default_global_config(force)?;
    eprintln!("{}", init_result_message(&result));
    Ok(())
}

fn init_result_message(result: &GlobalConfigInitResult) -> String {
    match result {
        GlobalConfigInitResult::Created { path } => {
            format!("wrote default config to {}", path.display())
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => format!(
            "config already exists at {} (use `autosuggest init --force` to overwrite)",
            path.display()
        ),
        GlobalConfigInitResult::Overwritten { path, backup_path } => format!(
            "rewrote {} (previous version saved to {})",
            path.display(),
            backup_path.display()
        ),
    }
}
