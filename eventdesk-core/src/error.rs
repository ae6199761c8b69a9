//! Error types for eventdesk.

use thiserror::Error;

/// Errors that can occur in eventdesk operations.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Auth(#[from] AuthError),
}

/// Failures of the placeholder credential store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Username taken")]
    UsernameTaken,

    #[error("Email already used")]
    EmailInUse,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
