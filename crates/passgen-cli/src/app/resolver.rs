//! Path resolution and loading for the config file.

use std::path::PathBuf;

use tracing::debug;

use crate::config::{default_config_path, read_config, PassgenConfig};

/// Resolve the config file path, checking PASSGEN_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("PASSGEN_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or built-in defaults when there is none.
///
/// A config file that exists but cannot be parsed is an error.
pub fn load_config() -> anyhow::Result<PassgenConfig> {
    let path = match resolve_config_path() {
        Ok(path) => path,
        Err(err) => {
            debug!(error = %err, "no config path; using defaults");
            return Ok(PassgenConfig::default());
        }
    };

    if !path.exists() {
        debug!(path = %path.display(), "config not found; using defaults");
        return Ok(PassgenConfig::default());
    }

    debug!(path = %path.display(), "loading config");
    read_config(&path)
}
