//! reqwest-backed [`UserLoader`].

use async_trait::async_trait;
use tracing::debug;

use super::{FetchError, UserLoader, user_url};
use crate::constants::USER_AGENT;
use crate::models::UserRecord;

/// Fetches user records with an unauthenticated `GET`.
///
/// The response status is not inspected: any body that decodes as a
/// `{name, email}` object counts as success, whatever the status code.
#[derive(Debug, Clone)]
pub struct HttpUserLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserLoader {
    /// Create a loader for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::transport(&base_url, e))?;
        Ok(Self { client, base_url })
    }

    /// Create a loader reusing an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UserLoader for HttpUserLoader {
    async fn load(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        let url = user_url(&self.base_url, user_id);
        debug!(%url, "requesting user record");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;
        debug!(%url, %status, bytes = body.len(), "user record response");

        serde_json::from_slice(&body).map_err(|e| FetchError::decode(&url, e))
    }
}
