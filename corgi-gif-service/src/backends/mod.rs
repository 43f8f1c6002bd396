//! GIF search backend implementations
//!
//! This module provides a trait-based abstraction over the upstream search
//! API so the proxy can be exercised against an in-process fake.
//! Currently supports Giphy.

use async_trait::async_trait;

use crate::error::SearchResult;

pub mod giphy;

/// Parameters of a single upstream search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Full query string, theme keyword included
    pub q: String,
    /// Maximum number of candidates
    pub limit: u32,
    /// Content rating ceiling
    pub rating: String,
    /// Language hint
    pub lang: String,
}

/// Trait for GIF search backends
///
/// Backends own the transport: timeouts, status handling and reading the
/// body. Failures there are `SearchError::Fetch`. Parsing the body is left
/// to the caller.
#[async_trait]
pub trait GifBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Run a search and return the raw response body
    async fn search(&self, query: &SearchQuery) -> SearchResult<String>;
}
