use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager, Runtime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "waterproof.log";

/// Used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info,waterproof_lib=debug";

/// Keeps the non-blocking file writer alive; held in Tauri managed state.
pub struct LogGuard(#[allow(dead_code)] WorkerGuard);

/// Directory the log file is written to. Falls back to the system temp dir
/// when Tauri cannot resolve a log directory.
pub fn get_log_dir<R: Runtime>(app: &AppHandle<R>) -> PathBuf {
    app.path()
        .app_log_dir()
        .unwrap_or_else(|_| std::env::temp_dir().join("waterproof"))
}

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Initialize logging to both `<log_dir>/waterproof.log` and stderr.
///
/// Returns `None` if a global subscriber is already installed. If the log
/// file cannot be opened only stderr is used.
pub fn init_logging(log_dir: &Path) -> Option<LogGuard> {
    let create_dir_result = std::fs::create_dir_all(log_dir);

    let mut guard = None;
    let file_layer = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
    {
        Ok(appender) => {
            let (non_blocking_file, worker_guard) = tracing_appender::non_blocking(appender);
            guard = Some(LogGuard(worker_guard));
            Some(
                fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
        }
        Err(e) => {
            match create_dir_result {
                Err(dir_err) => eprintln!(
                    "[waterproof] could not open log file: {} (creating {} failed: {})",
                    e,
                    log_dir.display(),
                    dir_err
                ),
                Ok(()) => eprintln!("[waterproof] could not open log file: {}", e),
            }
            None
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true)
                .compact(),
        )
        .try_init()
        .ok()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Waterproof logging initialized"
    );
    tracing::info!(log_path = %log_file_path(log_dir).display(), "Log file location");

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_log_dir() {
        let dir = Path::new("logs");
        assert_eq!(log_file_path(dir), dir.join("waterproof.log"));
    }
}
