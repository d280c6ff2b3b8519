//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use passgen_core::PassgenError;

use crate::constants::INVALID_NUMERIC_MESSAGE;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput(String),

    /// History decryption failed
    Decryption {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Decryption { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// The generic error for a non-numeric form field.
    pub fn invalid_numeric() -> Self {
        CliError::InvalidInput(INVALID_NUMERIC_MESSAGE.to_string())
    }

    /// Create a Decryption error with message and hint.
    pub fn decryption_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Decryption {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Decryption { .. } => exit_codes::DECRYPTION_FAILED,
        }
    }
}

/// Lift core errors into their CLI counterpart where one exists.
pub fn from_core(err: PassgenError) -> anyhow::Error {
    if err.is_decryption() {
        return CliError::decryption_with_hint(
            err.to_string(),
            "Hint: History lines can only be read with the secret.key that wrote them.",
        )
        .into();
    }
    anyhow::Error::new(err)
}

/// Exit code for any error surfaced from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_invalid_numeric_message() {
        let err = CliError::invalid_numeric();
        assert_eq!(err.to_string(), "Please enter valid numeric values.");
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_decryption_errors_keep_raw_message() {
        let core = PassgenError::CorruptHistory {
            line: 3,
            message: "Header MAC is invalid".to_string(),
        };
        let err = from_core(core);
        assert_eq!(exit_code_for(&err), exit_codes::DECRYPTION_FAILED);
        assert!(err.to_string().contains("Header MAC is invalid"));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_other_core_errors_are_general() {
        let err = from_core(PassgenError::KeyFile("boom".to_string()));
        assert_eq!(exit_code_for(&err), 1);
    }
}
