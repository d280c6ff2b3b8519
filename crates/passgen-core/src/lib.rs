//! # Passgen Core
//!
//! Core library for Passgen - a memorable password generator with an
//! encrypted local history.
//!
//! This crate provides the generation algorithm, the key store and the
//! history log independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **corpus**: Adjective/noun word lists and the substitution table
//! - **generator**: Password construction from a generation request
//! - **crypto**: History key store and age encryption of batches
//! - **history**: Append-only encrypted history file
//! - **session**: One run's key, history log and generated passwords
//! - **paths**: Fixed key and history file names

pub mod corpus;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod generator;
pub mod history;
pub mod paths;
pub mod session;

pub use error::{PassgenError, Result};
pub use generator::{apply_substitution, build_batch, build_password, GenerationRequest};
pub use history::HistoryLog;
pub use paths::StoragePaths;
pub use session::Session;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
