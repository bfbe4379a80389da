use std::path::PathBuf;

use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::DialogExt;

use super::sertop::{FilePicker, PickFileRequest};

/// Native "open file" dialog provided by `tauri-plugin-dialog`.
///
/// `pick_file` blocks until the user answers, so call it off the main
/// thread (see `prompt_user_off_thread`).
pub struct TauriFilePicker<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriFilePicker<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> FilePicker for TauriFilePicker<R> {
    fn pick_file(&self, request: &PickFileRequest) -> Option<PathBuf> {
        let mut builder = self.app.dialog().file().set_title(&request.title);

        if !request.filter_extensions.is_empty() {
            let extensions: Vec<&str> = request
                .filter_extensions
                .iter()
                .map(String::as_str)
                .collect();
            builder = builder.add_filter(&request.filter_name, &extensions);
        }

        if let Some(default_path) = &request.default_path {
            if default_path.is_dir() {
                builder = builder.set_directory(default_path);
            } else {
                if let Some(dir) = default_path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    builder = builder.set_directory(dir);
                }
                if let Some(name) = default_path.file_name() {
                    builder = builder.set_file_name(name.to_string_lossy());
                }
            }
        }

        builder.blocking_pick_file()?.into_path().ok()
    }
}
