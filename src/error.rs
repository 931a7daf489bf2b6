//! Error types for passwdgen
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PasswdGenError
pub type Result<T> = std::result::Result<T, PasswdGenError>;

/// Unified error type for passwdgen operations
#[derive(Debug, Error)]
pub enum PasswdGenError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input. Please enter a valid type and length.")]
    InvalidInput,

    #[error("Bad request: the type inserted is not valid.")]
    InvalidType(char),

    #[error("Bad request: the length for the password is not valid.")]
    InvalidLength(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Error resolving host: {0}")]
    Resolve(String),

    #[error("Request rejected by server")]
    Rejected,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PasswdGenError {
    /// True for errors caused by what the user typed, as opposed to the
    /// socket or the server.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PasswdGenError::InvalidInput
                | PasswdGenError::InvalidType(_)
                | PasswdGenError::InvalidLength(_)
        )
    }
}
