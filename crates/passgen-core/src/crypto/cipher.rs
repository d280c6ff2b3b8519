//! Age encryption of history batches to single-line base64 tokens.

use std::io::{Read, Write};
use std::iter;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::key::HistoryKey;
use crate::error::{PassgenError, Result};

/// Encrypt `data` to the key's recipient and return a base64 token.
///
/// The token contains no newlines, so it can be stored as one line.
///
/// # Errors
///
/// Returns `PassgenError::Crypto` if the key cannot be parsed or the age
/// writer fails.
///
/// # Examples
///
/// ```
/// use passgen_core::crypto::{decrypt, encrypt, HistoryKey};
///
/// let key = HistoryKey::generate();
/// let token = encrypt(b"secret data", &key).unwrap();
/// assert!(!token.contains('\n'));
/// assert_eq!(decrypt(&token, &key).unwrap(), b"secret data");
/// ```
pub fn encrypt(data: &[u8], key: &HistoryKey) -> Result<String> {
    let identity = key.identity().map_err(PassgenError::Crypto)?;
    let recipient = identity.to_public();

    let encryptor =
        age::Encryptor::with_recipients(iter::once(&recipient as &dyn age::Recipient))
            .map_err(|e| PassgenError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| PassgenError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(data)
        .map_err(|e| PassgenError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| PassgenError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(STANDARD.encode(encrypted))
}

/// Decrypt a base64 token produced by [`encrypt`].
///
/// # Errors
///
/// Returns `PassgenError::Decryption` carrying the underlying message if:
/// - The token is not valid base64
/// - The key cannot be parsed
/// - The token was encrypted under a different key
/// - Any byte of the ciphertext was modified
pub fn decrypt(token: &str, key: &HistoryKey) -> Result<Vec<u8>> {
    let encrypted = STANDARD
        .decode(token.trim())
        .map_err(|e| PassgenError::Decryption(format!("Invalid token encoding: {}", e)))?;

    let identity = key.identity().map_err(PassgenError::Decryption)?;

    let decryptor = age::Decryptor::new(encrypted.as_slice())
        .map_err(|e| PassgenError::Decryption(e.to_string()))?;

    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| PassgenError::Decryption(e.to_string()))?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| PassgenError::Decryption(e.to_string()))?;

    Ok(decrypted)
}
