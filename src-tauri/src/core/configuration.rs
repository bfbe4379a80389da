use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Runtime};
use tokio::fs;
use tracing::{debug, error, info};

use super::error::ConfigError;
use super::paths::{config_path_in, get_app_data_dir};

// ── Configuration (<app data>/wpconfig.json) ─────────────────────────────────

/// Location of the `sertop` executable; empty while unresolved.
pub const SERTOP_PATH_KEY: &str = "sertopPath";

/// The only keys `update` will ever write.
pub const RECOGNIZED_KEYS: &[&str] = &[SERTOP_PATH_KEY];

/// Settings object as stored on disk.
///
/// Kept as a raw JSON object: whatever parses is handed back untouched, so
/// keys written by other versions survive a read-modify-write cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Default for Configuration {
    fn default() -> Self {
        let mut map = Map::new();
        map.insert(SERTOP_PATH_KEY.to_string(), Value::String(String::new()));
        Self(map)
    }
}

impl Configuration {
    /// Stored sertop path, or `""` if absent or not a string.
    pub fn sertop_path(&self) -> &str {
        self.0
            .get(SERTOP_PATH_KEY)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Overwrite recognized keys from `values`; everything else is dropped.
    pub fn merge(&mut self, values: &HashMap<String, String>) {
        for (key, value) in values {
            if RECOGNIZED_KEYS.contains(&key.as_str()) {
                self.0.insert(key.clone(), Value::String(value.clone()));
            } else {
                debug!(key = %key, "Ignoring unrecognized configuration key");
            }
        }
    }

    /// Pretty-printed JSON with a 4-space indent.
    fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Reads and writes `wpconfig.json` in one user data directory.
///
/// Holds no cached state: every call goes back to disk, so two concurrent
/// `update`s race and the last write wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(user_data_dir: &Path) -> Self {
        Self {
            path: config_path_in(user_data_dir),
        }
    }

    /// Store rooted at the app's per-user data directory.
    pub fn for_app<R: Runtime>(app: &AppHandle<R>) -> Result<Self, ConfigError> {
        Ok(Self::new(&get_app_data_dir(app)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults on any failure.
    ///
    /// When the file does not exist yet the defaults are also written out so
    /// the user has a file to edit. A failed bootstrap write is logged only.
    pub async fn read(&self) -> Configuration {
        info!(path = %self.path.display(), "Looking for configuration file");

        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No configuration file found");
                let defaults = Configuration::default();
                if let Err(e) = self.write(&defaults).await {
                    error!(error = %e, "Could not create new configuration file");
                }
                return defaults;
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Could not read configuration file");
                return Configuration::default();
            }
        };

        match serde_json::from_str::<Configuration>(&raw) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Error when parsing configuration file");
                Configuration::default()
            }
        }
    }

    /// Merge recognized keys from `values` into the stored configuration.
    ///
    /// The read completes before the write is issued. Write failures are
    /// returned to the caller.
    pub async fn update(&self, values: &HashMap<String, String>) -> Result<(), ConfigError> {
        let mut config = self.read().await;
        config.merge(values);
        self.write(&config).await.map_err(|e| {
            error!(error = %e, "Could not write to configuration file");
            e
        })
    }

    async fn write(&self, config: &Configuration) -> Result<(), ConfigError> {
        let raw = config.to_pretty_json()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        fs::write(&self.path, raw)
            .await
            .map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
