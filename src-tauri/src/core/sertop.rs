//! Locating the `sertop` executable: a guess based on the usual opam
//! install locations, with a file-picker fallback.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::environment::HostEnvironment;

/// opam switches tried under each root, in order. First hit wins.
const OCAML_VARIANTS: &[&str] = &[
    "default",
    "ocaml-variants.4.07.1+mingw64c",
    "4.07.1+mingw64c",
];

const SERTOP_EXE: &str = "sertop.exe";

const DIALOG_TITLE: &str = "Please select the program named sertop";

/// `"win32"` is the identifier the frontend has historically passed.
pub fn is_windows_family(platform: &str) -> bool {
    matches!(platform, "windows" | "win32")
}

/// Install roots searched on Windows: the OCaml64 Cygwin home of the current
/// user, then `~/.opam`.
pub fn candidate_roots(env: &dyn HostEnvironment) -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(format!(
        r"C:\OCaml64\home\{}\.opam",
        env.user_name()
    ))];
    if let Some(home) = env.home_dir() {
        roots.push(home.join(".opam"));
    }
    roots
}

/// Path of `sertop.exe` inside one opam switch.
pub fn sertop_in(root: &Path, variant: &str) -> PathBuf {
    root.join(variant).join("bin").join(SERTOP_EXE)
}

/// Guess where sertop lives on the host. Returns `""` if nothing is found.
pub fn find_sertop(env: &dyn HostEnvironment) -> String {
    find_sertop_for(&env.platform(), env)
}

/// Same as [`find_sertop`] for an explicit platform identifier.
///
/// Only Windows-family platforms are searched; anywhere else the result is
/// always `""`.
pub fn find_sertop_for(platform: &str, env: &dyn HostEnvironment) -> String {
    if !is_windows_family(platform) {
        return String::new();
    }

    for root in candidate_roots(env) {
        debug!(path = %root.display(), "checking");
        if !env.path_exists(&root) {
            continue;
        }
        for variant in OCAML_VARIANTS {
            let guess = sertop_in(&root, variant);
            debug!(path = %guess.display(), "checking");
            if env.path_exists(&guess) {
                info!(path = %guess.display(), "Found sertop");
                return guess.to_string_lossy().into_owned();
            }
        }
    }

    debug!("could not find sertop in any known location");
    String::new()
}

// ── User selection ───────────────────────────────────────────────────────────

/// Parameters for a modal "open file" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PickFileRequest {
    pub title: String,
    /// Where the dialog starts; may name a file or just a directory.
    pub default_path: Option<PathBuf>,
    pub filter_name: String,
    /// Empty means no filter.
    pub filter_extensions: Vec<String>,
}

impl PickFileRequest {
    pub fn for_sertop(guess: &str) -> Self {
        // Without an extension sertop would be hidden by an `exe` filter,
        // so only Windows gets one.
        let filter_extensions = if cfg!(windows) {
            vec!["exe".to_string()]
        } else {
            Vec::new()
        };
        Self {
            title: DIALOG_TITLE.to_string(),
            default_path: (!guess.is_empty()).then(|| PathBuf::from(guess)),
            filter_name: "sertop".to_string(),
            filter_extensions,
        }
    }
}

/// A blocking, modal file chooser. `None` means the user cancelled.
pub trait FilePicker {
    fn pick_file(&self, request: &PickFileRequest) -> Option<PathBuf>;
}

pub fn is_sertop_path(path: &str) -> bool {
    path.ends_with(SERTOP_EXE) || path.ends_with("sertop")
}

/// Ask the user to point at sertop, starting from `guess`.
///
/// Anything not named `sertop`/`sertop.exe` is rejected with a warning, as is
/// a cancelled dialog; both return `""`. `config_path` only appears in the
/// warning so the user knows where to set the path by hand.
pub fn prompt_user(picker: &dyn FilePicker, guess: &str, config_path: &Path) -> String {
    let request = PickFileRequest::for_sertop(guess);
    match picker.pick_file(&request) {
        Some(selected) => {
            let selected = selected.to_string_lossy().into_owned();
            if is_sertop_path(&selected) {
                selected
            } else {
                warn!(
                    selected = %selected,
                    "Please specify a valid path for sertop in the configuration file {}",
                    config_path.display()
                );
                String::new()
            }
        }
        None => {
            warn!(
                "Please specify a path for sertop in the configuration file {}",
                config_path.display()
            );
            String::new()
        }
    }
}

/// [`prompt_user`] on a blocking worker thread, for use from async code.
pub async fn prompt_user_off_thread<P>(picker: P, guess: String, config_path: PathBuf) -> String
where
    P: FilePicker + Send + 'static,
{
    tokio::task::spawn_blocking(move || prompt_user(&picker, &guess, &config_path))
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, "sertop file dialog failed");
            String::new()
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
