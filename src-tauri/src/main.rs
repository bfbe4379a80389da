// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    // Large worker stacks, matching the runtime Tauri would build itself.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_stack_size(8 * 1024 * 1024)
        .build()
        .expect("Failed to create tokio runtime");

    tauri::async_runtime::set(rt.handle().clone());
    let _guard = rt.enter();

    waterproof_lib::run();
}
