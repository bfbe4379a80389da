use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager, Runtime};

use super::error::ConfigError;

// ── Path Helpers ─────────────────────────────────────────────────────────────

/// File name of the persisted configuration inside the app data directory.
pub const CONFIG_FILE_NAME: &str = "wpconfig.json";

/// Per-user application data directory as resolved by Tauri
/// (e.g. `~/.local/share/org.waterproof.desktop` on Linux).
pub fn get_app_data_dir<R: Runtime>(app: &AppHandle<R>) -> Result<PathBuf, ConfigError> {
    app.path()
        .app_data_dir()
        .map_err(|e| ConfigError::DataDir(e.to_string()))
}

pub fn config_path_in(user_data_dir: &Path) -> PathBuf {
    user_data_dir.join(CONFIG_FILE_NAME)
}
