//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the mobile client and the
//! CuidaRecife backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login, token refresh and logout DTOs
//!   - **[`dto::chat`]**: Help-assistant chat DTOs
//!   - **[`dto::vision`]**: Prescription image analysis DTOs
//!   - **[`dto::health`]**: Glucose, blood-pressure and prescription DTOs
//!   - **[`dto::medications`]**: Daily medication and dose tracking DTOs
//!   - **[`dto::pharmacy`]**: Pharmacy locator DTOs
//! - **[`utils`]**: Shared display helpers
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so multi-word fields carry
//! `#[serde(rename_all = "camelCase")]`. Optional request fields are omitted
//! when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`.
//! Timestamps are RFC 3339 strings (`chrono::DateTime<Utc>` with serde).
//!
//! ## Usage in the client
//!
//! ```rust,no_run
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "maria@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"email\""));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
