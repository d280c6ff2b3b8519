//! Append-only encrypted password history.
//!
//! Each generation batch becomes one line of the history file: the
//! passwords joined by `\n` with a trailing `\n`, encrypted as a single
//! age payload and base64 encoded. Lines are never rewritten.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::crypto::{decrypt, encrypt, HistoryKey};
use crate::error::{PassgenError, Result};

/// Handle to the history file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encrypt `passwords` as one batch and append it as a new line.
    ///
    /// An empty batch writes nothing.
    pub fn append(&self, key: &HistoryKey, passwords: &[String]) -> Result<()> {
        if passwords.is_empty() {
            debug!("skipping empty history batch");
            return Ok(());
        }

        let mut token = encrypt(batch_plaintext(passwords).as_bytes(), key)?;
        token.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(token.as_bytes())?;

        info!(
            path = %self.path.display(),
            passwords = passwords.len(),
            "appended history batch"
        );
        Ok(())
    }

    /// Decrypt every batch in file order.
    ///
    /// Returns `Ok(None)` when the history file does not exist, which is
    /// distinct from an existing but empty file (`Ok(Some(vec![]))`).
    ///
    /// # Errors
    ///
    /// The first line that fails to decrypt aborts the whole read with
    /// `PassgenError::CorruptHistory`; later lines are not attempted.
    pub fn read_all(&self, key: &HistoryKey) -> Result<Option<Vec<String>>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut batches = Vec::new();
        for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let raw = raw?;
            let line_number = index + 1;
            let line = std::str::from_utf8(&raw).map_err(|e| PassgenError::CorruptHistory {
                line: line_number,
                message: e.to_string(),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let plaintext = decrypt(line.trim_end_matches('\r'), key)
                .map_err(|err| corrupt_line(line_number, err))?;
            let batch = String::from_utf8(plaintext).map_err(|e| PassgenError::CorruptHistory {
                line: line_number,
                message: e.to_string(),
            })?;
            batches.push(batch);
        }

        debug!(batches = batches.len(), "read history");
        Ok(Some(batches))
    }
}

/// Passwords joined with `\n`, plus a trailing `\n`.
pub fn batch_plaintext(passwords: &[String]) -> String {
    let mut data = passwords.join("\n");
    data.push('\n');
    data
}

fn corrupt_line(line: usize, err: PassgenError) -> PassgenError {
    match err {
        PassgenError::Decryption(message) => PassgenError::CorruptHistory { line, message },
        other => other,
    }
}
