use std::collections::HashMap;

use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

use crate::core::{self, ConfigStore};

// ── Configuration ────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn read_configuration(app: AppHandle) -> Result<core::Configuration, String> {
    let store = ConfigStore::for_app(&app).map_err(|e| e.to_string())?;
    Ok(store.read().await)
}

/// Only recognized keys in `values` are stored; the rest are ignored.
#[tauri::command]
pub async fn update_configuration(
    app: AppHandle,
    values: HashMap<String, String>,
) -> Result<(), String> {
    let store = ConfigStore::for_app(&app).map_err(|e| e.to_string())?;
    store.update(&values).await.map_err(|e| e.to_string())
}

/// Show `wpconfig.json` in the OS file manager so it can be edited by hand.
#[tauri::command]
pub async fn reveal_configuration(app: AppHandle) -> Result<(), String> {
    let store = ConfigStore::for_app(&app).map_err(|e| e.to_string())?;
    // Reading creates the file if this is the first run.
    store.read().await;
    app.opener()
        .reveal_item_in_dir(store.path())
        .map_err(|e| e.to_string())
}
