//! UserLoader trait and the user endpoint URL scheme.
//!
//! The view talks to the network only through [`UserLoader`], so tests
//! can substitute a scripted loader for the HTTP one.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::constants::USER_PATH_SEGMENT;
use crate::models::UserRecord;

pub use http::HttpUserLoader;

/// A failed fetch. Transport and decode failures are not distinguished.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to fetch user data from {url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    /// The request never produced a response body.
    pub fn transport(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            reason: err.to_string(),
        }
    }

    /// The body was not a `{name, email}` JSON object.
    pub fn decode(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self {
            url: url.into(),
            reason: format!("invalid user payload: {err}"),
        }
    }
}

/// Reads one user record by identifier.
#[async_trait]
pub trait UserLoader: Send + Sync {
    /// Fetch the record for `user_id`. A single attempt, never retried.
    async fn load(&self, user_id: &str) -> Result<UserRecord, FetchError>;
}

/// Build `<base>/user/<user_id>`.
///
/// The identifier is inserted verbatim; an empty one yields a path ending
/// in `/user/`. A trailing slash on `base` is not doubled.
pub fn user_url(base: &str, user_id: &str) -> String {
    format!(
        "{}/{USER_PATH_SEGMENT}/{user_id}",
        base.trim_end_matches('/')
    )
}
