//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// History could not be decrypted (wrong key, tampered or corrupt line).
    pub const DECRYPTION_FAILED: i32 = 5;
}

/// Message shown for any non-numeric generation field.
pub const INVALID_NUMERIC_MESSAGE: &str = "Please enter valid numeric values.";

/// Message shown when no history file exists yet.
pub const NO_HISTORY_MESSAGE: &str = "No history file found.";
