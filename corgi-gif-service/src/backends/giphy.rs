//! Giphy backend
//!
//! Implements the GifBackend trait against the Giphy search endpoint.
//! See: https://developers.giphy.com/docs/api/endpoint#search

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{GifBackend, SearchQuery};
use crate::config::GiphyConfig;
use crate::error::{SearchError, SearchResult};

/// Giphy backend
pub struct GiphyBackend {
    client: Client,
    config: GiphyConfig,
}

impl GiphyBackend {
    pub fn new(config: GiphyConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("corgi-gif-service/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GifBackend for GiphyBackend {
    fn name(&self) -> &str {
        "giphy"
    }

    async fn search(&self, query: &SearchQuery) -> SearchResult<String> {
        let limit = query.limit.to_string();
        let params = [
            ("api_key", self.config.api_key.as_str()),
            ("q", query.q.as_str()),
            ("limit", limit.as_str()),
            ("rating", query.rating.as_str()),
            ("lang", query.lang.as_str()),
        ];

        // The request URL carries the API key, keep it out of error details
        let response = self
            .client
            .get(&self.config.url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::fetch(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("Giphy returned {}: {}", status, text);
            return Err(SearchError::Fetch(anyhow::anyhow!(
                "Giphy error {}: {}",
                status,
                text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::fetch(e.without_url()))
    }
}
