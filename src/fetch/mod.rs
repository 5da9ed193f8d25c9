//! Remote fetching
//!
//! Every network call of the dashboard goes through the [`Fetcher`] trait:
//! one GET, one timeout, no retries.
//!
//! # Modules
//!
//! - [`http`]: `reqwest` implementation
//! - [`error`]: Failure classification (timeout, HTTP status, network, decode)

pub mod error;
pub mod http;

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use serde::de::DeserializeOwned;

pub use self::error::FetchError;
pub use self::http::HttpFetcher;

/// Expected shape of a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Json,
    Text,
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
}

/// Trait for issuing a single timed GET request
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and decodes the body as `shape`
    ///
    /// # Returns
    /// * `Ok(Payload)` - The decoded body
    /// * `Err(FetchError::Timeout)` - No complete response within `timeout`
    /// * `Err(FetchError::Http)` - The server answered with a non-success status
    /// * `Err(FetchError::Decode)` - The body does not match `shape`
    async fn fetch(
        &self,
        url: &str,
        shape: ResponseShape,
        timeout: Duration,
    ) -> Result<Payload, FetchError>;
}

/// Fetches `url` as JSON and deserializes it into `T`
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    url: &str,
    timeout: Duration,
) -> Result<T, FetchError> {
    let decoded = match fetcher.fetch(url, ResponseShape::Json, timeout).await? {
        Payload::Json(value) => serde_json::from_value(value),
        Payload::Text(text) => serde_json::from_str(&text),
    };
    decoded.map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches `url` as text
pub async fn fetch_text(
    fetcher: &dyn Fetcher,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    match fetcher.fetch(url, ResponseShape::Text, timeout).await? {
        Payload::Text(text) => Ok(text),
        Payload::Json(value) => Ok(value.to_string()),
    }
}
