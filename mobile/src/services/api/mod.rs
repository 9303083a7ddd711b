//! # Backend API Client Module
//!
//! HTTP client for communicating with the CuidaRecife backend API.
//! Handles authentication, the help assistant, prescription scanning,
//! health tracking, medication doses and the pharmacy locator.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, token state and refresh-and-retry
//! ├── auth.rs         - Authentication endpoints (register, login, logout)
//! ├── chat.rs         - Help assistant endpoint
//! ├── vision.rs       - Prescription photo analysis endpoints
//! ├── health.rs       - Glucose, pressure and prescription endpoints
//! ├── medications.rs  - Daily medications and dose log endpoints
//! └── pharmacy.rs     - Pharmacy locator endpoint
//! ```

pub mod auth;
pub mod chat;
pub mod client;
pub mod health;
pub mod medications;
pub mod pharmacy;
pub mod vision;

// Re-export types for convenient access
pub use client::{ApiClient, ApiResult, SessionTokens};
