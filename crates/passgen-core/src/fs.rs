//! Filesystem helpers for the key file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PassgenError, Result};

/// Write the key file in one step.
///
/// The bytes go to a sibling temp file restricted to the owner, which is
/// then renamed over `path`. A crash mid-write leaves no truncated key.
pub fn write_key_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_sibling(path);
    // A crashed run with a reused pid may have left this name behind.
    if temp_path.exists() {
        let _ = fs::remove_file(&temp_path);
    }
    let result = write_restricted(&temp_path, bytes)
        .and_then(|()| fs::rename(&temp_path, path));

    result.map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PassgenError::KeyFile(format!("failed to write {}: {}", path.display(), e))
    })
}

fn write_restricted(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp-{}", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_key_file_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.key");

        write_key_file(&dest, b"key-bytes").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"key-bytes");
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_write_key_file_replaces_stale_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.key");
        fs::write(temp_sibling(&dest), b"left over").unwrap();

        write_key_file(&dest, b"key-bytes").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"key-bytes");
        assert!(!temp_sibling(&dest).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.key");
        write_key_file(&dest, b"key-bytes").unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_write_key_file_missing_dir_fails_cleanly() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nope").join("secret.key");

        let err = write_key_file(&dest, b"key-bytes").unwrap_err();
        assert!(matches!(err, PassgenError::KeyFile(_)));
        assert!(!dest.exists());
    }
}
