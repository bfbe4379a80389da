mod configuration;
mod dialog;
mod environment;
mod error;
mod paths;
mod resolve;
mod sertop;

// Re-export the public API so callers can use `core::function_name`.
pub use configuration::{ConfigStore, Configuration, RECOGNIZED_KEYS, SERTOP_PATH_KEY};
pub use dialog::TauriFilePicker;
pub use environment::{get_platform, HostEnvironment, SystemEnvironment};
pub use error::ConfigError;
pub use paths::{config_path_in, get_app_data_dir, CONFIG_FILE_NAME};
pub use resolve::resolve_sertop_path;
pub use sertop::{
    candidate_roots, find_sertop, find_sertop_for, is_sertop_path, is_windows_family,
    prompt_user, prompt_user_off_thread, sertop_in, FilePicker, PickFileRequest,
};
