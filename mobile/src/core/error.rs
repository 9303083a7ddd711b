//! # Common Error Types
//!
//! Consolidated error handling for the client core.
//!
//! The API layer itself reports failures as plain strings (the screens only
//! ever show a message), and those strings lift into [`AppError::Api`] when
//! an operation crosses into code that wants a typed error.
//!
//! ## Error Categories
//!
//! - **Api**: Backend communication errors (network, HTTP, JSON parsing)
//! - **Session**: Session lifecycle errors (restore, login, logout)
//! - **Storage**: On-device key-value storage errors
//! - **Validation**: Input validation errors (invalid format, missing fields)

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the client.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
///
/// # Example
///
/// ```rust
/// use mobile::core::error::AppError;
///
/// let err = AppError::Api("Network error: connection refused".to_string());
/// assert_eq!(err.to_string(), "API error: Network error: connection refused");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, non-2xx responses, and malformed response bodies
    /// all surface here with the message the screens display.
    #[error("API error: {0}")]
    Api(String),

    /// Session lifecycle error (restoring, persisting or clearing a session).
    #[error("Session error: {0}")]
    Session(String),

    /// On-device storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<crate::services::storage::StorageError> for AppError {
    fn from(err: crate::services::storage::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}
