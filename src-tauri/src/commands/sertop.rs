use tauri::{AppHandle, Runtime};

use crate::core::{self, ConfigStore, HostEnvironment, SystemEnvironment, TauriFilePicker};

// ── sertop ───────────────────────────────────────────────────────────────────

#[tauri::command]
pub fn get_platform() -> String {
    core::get_platform()
}

/// Guess the sertop location. `platform` defaults to the host's.
#[tauri::command]
pub fn find_sertop(platform: Option<String>) -> String {
    let env = SystemEnvironment;
    let platform = platform.unwrap_or_else(|| env.platform());
    core::find_sertop_for(&platform, &env)
}

/// Let the user pick sertop in a file dialog. Returns `""` when cancelled
/// or when the chosen file is not sertop. Does not save the result.
#[tauri::command]
pub async fn locate_sertop(app: AppHandle, guess: Option<String>) -> Result<String, String> {
    let store = ConfigStore::for_app(&app).map_err(|e| e.to_string())?;
    let picker = TauriFilePicker::new(app);
    let config_path = store.path().to_path_buf();
    Ok(core::prompt_user_off_thread(picker, guess.unwrap_or_default(), config_path).await)
}

#[tauri::command]
pub async fn resolve_sertop(app: AppHandle) -> Result<String, String> {
    resolve_for_app(app).await.map_err(|e| e.to_string())
}

/// Run the sertop resolution flow against the app's own store, host and
/// file dialog.
pub async fn resolve_for_app<R: Runtime>(
    app: AppHandle<R>,
) -> Result<String, core::ConfigError> {
    let store = ConfigStore::for_app(&app)?;
    core::resolve_sertop_path(&store, &SystemEnvironment, TauriFilePicker::new(app)).await
}
