//! The history key and its on-disk store.

use std::path::Path;

use age::secrecy::ExposeSecret;
use tracing::{debug, info};
use zeroize::ZeroizeOnDrop;

use crate::error::{PassgenError, Result};
use crate::fs::write_key_file;

/// Raw key file contents.
///
/// The bytes are the string encoding of an age X25519 identity. They are
/// not validated when loaded; an unusable key surfaces later as an
/// encryption or decryption error.
#[derive(Clone, ZeroizeOnDrop)]
pub struct HistoryKey {
    bytes: Vec<u8>,
}

impl HistoryKey {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let identity = age::x25519::Identity::generate();
        let encoded = identity.to_string();
        Self::from_bytes(encoded.expose_secret().as_bytes().to_vec())
    }

    /// Wrap raw key file bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parse the key into an age identity.
    pub(crate) fn identity(&self) -> std::result::Result<age::x25519::Identity, String> {
        let text = std::str::from_utf8(&self.bytes)
            .map_err(|_| "history key is not valid UTF-8".to_string())?;
        text.trim()
            .parse::<age::x25519::Identity>()
            .map_err(|e| format!("invalid history key: {}", e))
    }
}

impl std::fmt::Debug for HistoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Load the key from `path`, creating and persisting a new one if the file is absent.
///
/// # Examples
///
/// ```
/// use passgen_core::crypto::load_or_create_key;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("secret.key");
/// let created = load_or_create_key(&path).unwrap();
/// let loaded = load_or_create_key(&path).unwrap();
/// assert_eq!(created.as_bytes(), loaded.as_bytes());
/// ```
pub fn load_or_create_key(path: &Path) -> Result<HistoryKey> {
    if !path.exists() {
        let key = HistoryKey::generate();
        write_key_file(path, key.as_bytes())?;
        info!(path = %path.display(), "created new history key");
        return Ok(key);
    }

    let bytes = std::fs::read(path).map_err(|e| {
        PassgenError::KeyFile(format!("failed to read {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "loaded history key");
    Ok(HistoryKey::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generated_key_is_age_identity() {
        let key = HistoryKey::generate();
        assert!(key.as_bytes().starts_with(b"AGE-SECRET-KEY-1"));
        assert!(key.identity().is_ok());
    }

    #[test]
    fn test_generated_keys_differ() {
        let first = HistoryKey::generate();
        let second = HistoryKey::generate();
        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_create_then_load_returns_same_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secret.key");

        let created = load_or_create_key(&path).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), created.as_bytes());

        let loaded = load_or_create_key(&path).unwrap();
        assert_eq!(created.as_bytes(), loaded.as_bytes());
    }

    #[test]
    fn test_existing_key_is_not_validated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secret.key");
        std::fs::write(&path, b"truncated").unwrap();

        let key = load_or_create_key(&path).unwrap();
        assert_eq!(key.as_bytes(), b"truncated");
        match key.identity() {
            Err(message) => assert!(message.contains("invalid history key")),
            Ok(_) => panic!("truncated key should not parse"),
        }
    }

    #[test]
    fn test_missing_parent_dir_is_key_file_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("secret.key");
        let err = load_or_create_key(&path).unwrap_err();
        assert!(matches!(err, PassgenError::KeyFile(_)));
    }

    #[test]
    fn test_key_debug_redacts() {
        let key = HistoryKey::generate();
        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("AGE-SECRET-KEY"));
    }
}
