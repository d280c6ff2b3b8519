//! A single run of the generator: one key, one history log.

use rand::Rng;
use tracing::debug;

use crate::crypto::{load_or_create_key, HistoryKey};
use crate::error::Result;
use crate::generator::{build_batch, GenerationRequest};
use crate::history::HistoryLog;
use crate::paths::StoragePaths;

/// Owns the history key and log for the lifetime of a run, plus the
/// passwords generated so far in this run.
#[derive(Debug)]
pub struct Session {
    key: HistoryKey,
    log: HistoryLog,
    generated: Vec<String>,
}

impl Session {
    /// Load (or create) the key and bind the history log.
    pub fn open(paths: &StoragePaths) -> Result<Self> {
        let key = load_or_create_key(&paths.key_file)?;
        Ok(Self::with_key(key, HistoryLog::new(&paths.history_file)))
    }

    fn with_key(key: HistoryKey, log: HistoryLog) -> Self {
        Self {
            key,
            log,
            generated: Vec::new(),
        }
    }

    /// Generate `count` passwords with the thread-local CSPRNG.
    pub fn generate(&mut self, request: &GenerationRequest, count: usize) -> Result<Vec<String>> {
        self.generate_with_rng(request, count, &mut rand::thread_rng())
    }

    /// Generate `count` passwords, record them, and append them to history as one batch.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        request: &GenerationRequest,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let passwords = build_batch(request, count, rng);
        self.log.append(&self.key, &passwords)?;
        self.generated.extend(passwords.iter().cloned());
        debug!(count = passwords.len(), "generated passwords");
        Ok(passwords)
    }

    /// All decrypted history batches, or `None` if no history file exists.
    pub fn history(&self) -> Result<Option<Vec<String>>> {
        self.log.read_all(&self.key)
    }

    /// Passwords generated during this run, oldest first.
    pub fn generated(&self) -> &[String] {
        &self.generated
    }
}
