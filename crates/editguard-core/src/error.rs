//! Shared error type across editguard crates.

use thiserror::Error;

/// Stable error codes attached to log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request bytes are not a well-shaped hook payload.
    MalformedRequest,
    /// Request could not be read from the host.
    UnreadableInput,
    /// Response encoding or output failure.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::UnreadableInput => "UNREADABLE_INPUT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Unified error type used by core and hook.
///
/// None of these reach the host as a failure: every variant resolves to an
/// allow decision and a zero exit status.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("unreadable input: {0}")]
    UnreadableInput(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GuardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GuardError::MalformedRequest(_) => ErrorCode::MalformedRequest,
            GuardError::UnreadableInput(_) => ErrorCode::UnreadableInput,
            GuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<std::io::Error> for GuardError {
    fn from(e: std::io::Error) -> Self {
        GuardError::UnreadableInput(e.to_string())
    }
}
