//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the mobile client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, refresh, logout and user profile DTOs
//! - [`chat`] - Help-assistant chat DTOs
//! - [`vision`] - Image analysis and prescription verification DTOs
//! - [`health`] - Glucose, blood-pressure and prescription record DTOs
//! - [`medications`] - Daily medication schedule and dose log DTOs
//! - [`pharmacy`] - Pharmacy directory DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase on the wire via `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "maria@example.com",
//!   "password": "MyPassword123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "accessToken": "eyJhbGciOiJIUzI1NiIs...",
//!   "refreshToken": "b3a1c2d4...",
//!   "user": {
//!     "id": "1",
//!     "name": "Maria",
//!     "email": "maria@example.com"
//!   }
//! }
//! ```

pub mod auth;
pub mod chat;
pub mod health;
pub mod medications;
pub mod pharmacy;
pub mod vision;
