//! `reqwest` implementation of [`Fetcher`]

use std::time::Duration;

use tracing::{debug, warn};

use crate::fetch::error::FetchError;
use crate::fetch::{Fetcher, Payload, ResponseShape};

const USER_AGENT: &str = concat!("bcdice-status/", env!("CARGO_PKG_VERSION"));

/// Fetcher backed by a shared `reqwest::Client`
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    async fn get(&self, url: &str, shape: ResponseShape) -> Result<Payload, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(FetchError::Http { status });
        }

        let payload = match shape {
            ResponseShape::Json => Payload::Json(response.json().await?),
            ResponseShape::Text => Payload::Text(response.text().await?),
        };
        Ok(payload)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        shape: ResponseShape,
        timeout: Duration,
    ) -> Result<Payload, FetchError> {
        debug!("GET {} ({:?}, timeout {}ms)", url, shape, timeout.as_millis());

        // The timer covers the whole exchange, body included.
        let result = tokio::time::timeout(timeout, self.get(url, shape))
            .await
            .unwrap_or(Err(FetchError::Timeout(timeout)));

        if let Err(e) = &result {
            warn!("Failed to fetch {}: {}", url, e);
        }
        result
    }
}
