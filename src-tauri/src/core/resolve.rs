use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use super::configuration::{ConfigStore, SERTOP_PATH_KEY};
use super::environment::HostEnvironment;
use super::error::ConfigError;
use super::sertop::{find_sertop, is_sertop_path, prompt_user_off_thread, FilePicker};

// ── Startup resolution ───────────────────────────────────────────────────────

/// Make sure the configuration points at a usable sertop.
///
/// A stored path naming an existing `sertop` file is returned as-is. Otherwise the usual install
/// locations are searched and, failing that, the user is asked through
/// `picker`. A newly found path is written back to the store; an empty
/// result means sertop is still unresolved and nothing is written.
pub async fn resolve_sertop_path<P>(
    store: &ConfigStore,
    env: &dyn HostEnvironment,
    picker: P,
) -> Result<String, ConfigError>
where
    P: FilePicker + Send + 'static,
{
    let config = store.read().await;
    let current = config.sertop_path().to_string();
    if is_sertop_path(&current) && env.is_file(Path::new(&current)) {
        debug!(path = %current, "Configured sertop path is valid");
        return Ok(current);
    }

    let mut found = find_sertop(env);
    if found.is_empty() {
        found = prompt_user_off_thread(picker, current, store.path().to_path_buf()).await;
    }
    if found.is_empty() {
        return Ok(found);
    }

    let values = HashMap::from([(SERTOP_PATH_KEY.to_string(), found.clone())]);
    store.update(&values).await?;
    info!(path = %found, "Saved sertop path");
    Ok(found)
}

// ── Tests ───────────────────────────────────────────────────────────────────
