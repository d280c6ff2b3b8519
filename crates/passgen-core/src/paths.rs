//! Fixed storage locations.

use std::path::{Path, PathBuf};

/// Key file name, relative to the working directory.
pub const KEY_FILE: &str = "secret.key";

/// History file name, relative to the working directory.
pub const HISTORY_FILE: &str = "password_history.enc";

/// Where the key and history live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub key_file: PathBuf,
    pub history_file: PathBuf,
}

impl StoragePaths {
    /// Both files placed inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            key_file: dir.join(KEY_FILE),
            history_file: dir.join(HISTORY_FILE),
        }
    }
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self {
            key_file: PathBuf::from(KEY_FILE),
            history_file: PathBuf::from(HISTORY_FILE),
        }
    }
}
