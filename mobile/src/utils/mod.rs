//! # Utilities
//!
//! Small helpers shared by the screens.
//!
//! - **[`validation`]**: form input validation (login, registration,
//!   readings, chat)

pub mod validation;
