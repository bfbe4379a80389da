use std::path::{Path, PathBuf};

// ── Host Environment ─────────────────────────────────────────────────────────

/// What the executable search needs to know about the machine it runs on.
///
/// Implemented for the real OS by [`SystemEnvironment`]; tests supply a fake
/// with a simulated filesystem.
pub trait HostEnvironment: Send + Sync {
    /// OS identifier as reported by [`get_platform`].
    fn platform(&self) -> String;

    /// Login name of the current OS user.
    fn user_name(&self) -> String;

    fn home_dir(&self) -> Option<PathBuf>;

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// True only for an existing regular file (symlinks are followed).
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// The machine this process is running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl HostEnvironment for SystemEnvironment {
    fn platform(&self) -> String {
        get_platform()
    }

    fn user_name(&self) -> String {
        let from_env = std::env::var("USERNAME")
            .or_else(|_| std::env::var("USER"))
            .ok()
            .filter(|name| !name.is_empty());
        from_env
            .or_else(|| {
                dirs::home_dir()
                    .and_then(|home| home.file_name().map(|n| n.to_string_lossy().into_owned()))
            })
            .unwrap_or_default()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Platform identifier of the running process (`"windows"`, `"linux"`,
/// `"macos"`, ...).
pub fn get_platform() -> String {
    std::env::consts::OS.to_string()
}
