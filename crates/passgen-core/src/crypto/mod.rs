//! Cryptographic operations for the password history.
//!
//! - **Key store**: one age X25519 identity per installation, persisted to
//!   the key file on first use and never rotated.
//! - **Cipher**: each history batch is encrypted to that identity's
//!   recipient with age (ChaCha20-Poly1305 payload, authenticated header),
//!   then base64 encoded into a single text line.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Casual reading of the history file
//! - Tampering with, or swapping in, history lines
//!
//! We do NOT defend against:
//! - Anyone who can read the key file
//! - Compromised OS / memory access while running

pub mod cipher;
pub mod key;

pub use cipher::{decrypt, encrypt};
pub use key::{load_or_create_key, HistoryKey};
