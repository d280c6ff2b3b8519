//! Error types for Passgen core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Passgen operations.
pub type Result<T> = std::result::Result<T, PassgenError>;

/// Core error type for Passgen operations.
#[derive(Debug, Error)]
pub enum PassgenError {
    /// Encryption failed (including an unusable key)
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// A single ciphertext could not be decrypted
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// A history line failed to decrypt; the read stops here
    #[error("Decryption error on history line {line}: {message}")]
    CorruptHistory { line: usize, message: String },

    /// Key file could not be read or written
    #[error("Key file error: {0}")]
    KeyFile(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PassgenError {
    /// Whether this error came from failing to decrypt history data.
    pub fn is_decryption(&self) -> bool {
        matches!(
            self,
            PassgenError::Decryption(_) | PassgenError::CorruptHistory { .. }
        )
    }
}
