use crate::constants::APP_NAME;
use std::path::{Path, PathBuf};

/// Base directory for everything the application stores: `~/.config/nba_stats`.
///
/// Falls back to the current directory when no home directory is available.
pub fn get_app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(".config")
        .join(APP_NAME)
}

/// Returns the path of the config file.
pub fn get_config_path() -> String {
    get_app_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the default log directory.
pub fn get_log_dir_path() -> String {
    get_app_dir().join("logs").to_string_lossy().to_string()
}

/// Returns the default root of the dated response cache.
pub fn get_cache_dir_path() -> PathBuf {
    get_app_dir()
}
