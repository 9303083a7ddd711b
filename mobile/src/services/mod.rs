//! # Services Module
//!
//! External service integrations for the CuidaRecife client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api.rs      - Backend HTTP API client
//! │                 (auth, chat, vision, health, medications, pharmacies)
//! ├── session.rs  - Session holder: persists tokens and the user profile
//! └── storage.rs  - On-device key-value storage seam
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     Screens                          │
//! │                                                      │
//! │  ┌──────────────────┐      ┌────────────────────┐    │
//! │  │  SessionManager  │─────▶│  ApiClient         │    │
//! │  │  (session.rs)    │      │  (api/client.rs)   │    │
//! │  └────────┬─────────┘      └─────────┬──────────┘    │
//! │           │                          │               │
//! └───────────┼──────────────────────────┼───────────────┘
//!             │ KeyValueStore            │ HTTPS/JSON
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────┐
//! │  On-device storage  │    │  CuidaRecife backend    │
//! └─────────────────────┘    └─────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! `ApiClient` is cheaply clonable and internally synchronized; it can be
//! shared across tasks. `SessionManager` holds its cached profile behind a
//! `parking_lot::RwLock` and is safe to share behind an `Arc`.

pub mod api;
pub mod session;
pub mod storage;
