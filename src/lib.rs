//! userview — user record viewer (library crate).
//!
//! Re-exports public modules for integration tests and embedding hosts.

pub mod config;
pub mod constants;
pub mod env;
pub mod loader;
pub mod logging;
pub mod models;
pub mod output;
pub mod view;
