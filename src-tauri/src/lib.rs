pub mod core;

mod commands;
mod logging;

#[cfg(test)]
mod test_support;

use tauri::Manager;

// ── App Entry ────────────────────────────────────────────────────────────────

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::*;

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let log_dir = logging::get_log_dir(app.handle());
            if let Some(guard) = logging::init_logging(&log_dir) {
                app.manage(guard);
            }

            // Resolve sertop in the background; a pending file dialog must
            // not hold up the window.
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                match resolve_for_app(handle).await {
                    Ok(path) if path.is_empty() => tracing::warn!("sertop is not configured"),
                    Ok(path) => tracing::info!(path = %path, "Using sertop"),
                    Err(e) => tracing::error!(error = %e, "Could not save sertop path"),
                }
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            read_configuration,
            update_configuration,
            reveal_configuration,
            get_platform,
            find_sertop,
            locate_sertop,
            resolve_sertop,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
