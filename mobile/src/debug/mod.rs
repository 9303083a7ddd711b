//! # Debug and Logging
//!
//! Tracing initialization for the client. The API layer emits structured
//! events (request failures, refresh outcomes, login timings); this module
//! wires them to stderr and, optionally, a rotating log file.
//!
//! - **[`config`]**: logging configuration from environment variables
//! - **[`logger`]**: subscriber initialization

pub mod config;
pub mod logger;

pub use config::DebugConfig;
