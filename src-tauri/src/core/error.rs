use std::path::PathBuf;

use thiserror::Error;

/// Failures that escape the configuration store.
///
/// A missing or malformed `wpconfig.json` is not an error: `read` logs it and
/// falls back to defaults. Only a failed write during `update` (or an
/// unresolvable data directory) reaches the caller.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The per-user application data directory could not be resolved.
    #[error("Could not resolve the application data directory: {0}")]
    DataDir(String),

    #[error("Could not write to configuration file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
