//! Core components of the `esg-dashboard` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EsgClient`] and its builder.
//! - The primary [`EsgError`] type.
//! - Runtime configuration ([`DashboardConfig`]).
//! - Internal networking, row decoding and fixture recording.

/// The main client (`EsgClient`), builder, retry policy and cache modes.
pub mod client;
/// Environment-driven configuration.
pub mod config;
/// The primary error type (`EsgError`) for the crate.
pub mod error;
pub(crate) mod fetch;
pub(crate) mod net;
pub mod wire;

pub use client::{CacheMode, EsgClient, EsgClientBuilder, RetryConfig};
pub use config::{ConfigError, DashboardConfig};
pub use error::EsgError;
