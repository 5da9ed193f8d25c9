//! Fetcher test utilities

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use bcdice_status::fetch::{FetchError, Fetcher, Payload, ResponseShape};

/// Fetcher answering from a fixed URL map
///
/// Unknown URLs fail with a network error. Every requested URL is recorded.
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, Result<Payload, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Ok(Payload::Json(body)));
        self
    }

    pub fn with_text(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Ok(Payload::Text(body.to_string())));
        self
    }

    pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(
        &self,
        url: &str,
        _shape: ResponseShape,
        timeout: Duration,
    ) -> Result<Payload, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Err(FetchError::Timeout(_))) => Err(FetchError::Timeout(timeout)),
            Some(response) => response.clone(),
            None => Err(FetchError::Network(format!("no response for {}", url))),
        }
    }
}
