//! # CuidaRecife Mobile Client Core - Library Root
//!
//! Client-side core of the CuidaRecife medication-adherence and
//! health-tracking assistant. This crate owns everything between the screens
//! and the wire: the authenticated API client, the session holder, and the
//! configuration and logging plumbing. Screens, navigation and rendering are
//! composed on top of it and stay out of this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              mobile (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  services::api      - Authenticated backend client     │
//! │  services::session  - Token/profile persistence        │
//! │  services::storage  - On-device key-value seam         │
//! │  config             - Environment-driven base URL      │
//! │  core               - Errors and service traits        │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTPS (JSON, bearer auth)
//!          ▼
//! ┌─────────────────────────────────────────────┐
//! │  CuidaRecife backend API                    │
//! │  /auth/*  /chat  /vision/*  /prescription/* │
//! │  /health/*  /medications/*  /pharmacies     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Single chokepoint for outbound calls
//!
//! Every backend operation goes through [`services::api::ApiClient`], which
//! attaches the bearer token, performs the silent refresh-and-retry on 401,
//! and converts every failure into a plain error string for the screens.
//!
//! ### Session lifecycle
//!
//! [`services::session::SessionManager`] wraps the client: it restores a
//! persisted session at startup, persists the token pair and user profile
//! after login, and clears everything on logout. On-device storage is
//! reached only through the [`services::storage::KeyValueStore`] trait.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mobile::config::ApiConfig;
//! use mobile::services::api::ApiClient;
//! use mobile::services::session::SessionManager;
//! use mobile::services::storage::MemoryStore;
//!
//! # async fn compose() {
//! let client = ApiClient::with_config(ApiConfig::from_env());
//! let session = SessionManager::new(
//!     Arc::new(client.clone()),
//!     Arc::new(MemoryStore::new()),
//! );
//! session.load_stored_auth().await;
//! # }
//! ```
//!
//! ## Testing
//!
//! Unit tests live next to their modules; the request/refresh/retry contract
//! is exercised end-to-end in `tests/` against an in-process stub backend.

pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ApiConfig, ApiEnv};
pub use crate::core::{AppError, Result};
pub use services::api::ApiClient;
pub use services::session::SessionManager;
