use dirs::home_dir;
use std::{env, path::PathBuf};

pub const HOME_ENV: &str = "BOOKKEEPER_HOME";
const DEFAULT_DIR_NAME: &str = ".bookkeeper";
const CONFIG_FILE: &str = "config.json";

/// Returns the application directory, defaulting to `~/.bookkeeper`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the preferences file inside `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
