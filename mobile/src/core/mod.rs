//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use mobile::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The [`ApiService`] trait lets screens and the session holder depend on an
//! abstract backend, so tests can substitute a mock:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mobile::core::service::ApiService;
//! use mobile::services::api::ApiClient;
//!
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::ApiService;
