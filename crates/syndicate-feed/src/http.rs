//! HTTP implementation of [`MenuFeed`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::FetchError;
use crate::payload::{RawPayload, classify};
use crate::source::MenuFeed;
use crate::target::FeedTarget;

/// Settings for [`HttpFeed`].
#[derive(Debug, Clone)]
pub struct HttpFeedConfig {
    /// Upper bound for the whole request, body included.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpFeedConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("syndicate/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches the menu feed with `reqwest`.
///
/// A request that exceeds the configured timeout is reported as
/// [`FetchError::Transport`].
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: Client,
}

impl HttpFeed {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: HttpFeedConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| FetchError::transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MenuFeed for HttpFeed {
    #[instrument(skip_all, fields(url = %target))]
    async fn fetch(&self, target: &FeedTarget) -> Result<RawPayload, FetchError> {
        let response = self
            .client
            .get(target.url().clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "Feed request failed");
                FetchError::transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        debug!(status, bytes = body.len(), "Feed response received");

        classify(status, &body)
    }

    fn name(&self) -> &str {
        "http"
    }
}
