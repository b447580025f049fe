//! Shared utilities, configuration, and error handling for Marketdesk
//!
//! This crate provides common functionality used across the Marketdesk services:
//! - Configuration management following 12-factor principles
//! - The shared error type and its `{ success, message }` response envelope
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;

pub use config::{AppEnv, Config};
pub use error::Error;
pub use extractors::ValidatedJson;
