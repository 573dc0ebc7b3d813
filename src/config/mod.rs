//! Configuration loading and layering.
//!
//! Handles `.userview.toml` loading, environment variable resolution,
//! and validation of the endpoint and tick settings.

pub mod loader;

pub use loader::{Config, ConfigError, EndpointConfig, ViewConfig};
