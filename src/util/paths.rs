//! Where sortrace keeps its config file and logs.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const DIR_NAME: &str = ".sortrace";
const CONFIG_FILE: &str = "config.toml";
const LOGS_DIR: &str = "logs";
const LOG_FILE: &str = "sortrace.log";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Pin the data directory for the rest of the process.
///
/// `None` selects `~/.sortrace`. The first call wins; a later call with a
/// different path is logged and ignored. Returns the directory in effect.
pub fn init_data_dir(custom: Option<PathBuf>) -> &'static Path {
    let requested = custom.unwrap_or_else(default_data_dir);
    let active = DATA_DIR.get_or_init(|| requested.clone());
    if *active != requested {
        tracing::debug!(
            requested = %requested.display(),
            active = %active.display(),
            "data directory already set"
        );
    }
    active
}

/// The pinned data directory, or `~/.sortrace` if none was pinned.
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DIR_NAME)
}

pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

pub fn logs_dir() -> PathBuf {
    data_dir().join(LOGS_DIR)
}

pub fn log_file_path() -> PathBuf {
    logs_dir().join(LOG_FILE)
}
