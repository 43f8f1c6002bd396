//! Corgi search proxy
//!
//! Turns an activity into a themed Giphy query, picks one of the returned
//! candidates at random and projects it into a [`CorgiGif`].

use anyhow::anyhow;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

use crate::backends::{giphy::GiphyBackend, GifBackend, SearchQuery};
use crate::config::{Config, GiphyConfig};
use crate::error::{SearchError, SearchResult};
use crate::types::{CorgiGif, GiphyGif, GiphySearchResponse};

/// Keyword prefixed to every search
pub const THEME_KEYWORD: &str = "corgi";
/// Activity used when the caller gives none
pub const DEFAULT_ACTIVITY: &str = "cute";
/// Title used when a candidate has none
pub const DEFAULT_TITLE: &str = "Corgi GIF";
/// Rating used when a candidate has none
pub const DEFAULT_RATING: &str = "g";

/// Resolves activities to random corgi GIFs
#[derive(Clone)]
pub struct SearchProxy {
    backend: Arc<dyn GifBackend>,
    limit: u32,
    rating: String,
    lang: String,
}

impl SearchProxy {
    /// Create a proxy over any backend, taking query parameters from `config`
    pub fn new(backend: Arc<dyn GifBackend>, config: &GiphyConfig) -> Self {
        Self {
            backend,
            limit: config.limit,
            rating: config.rating.clone(),
            lang: config.lang.clone(),
        }
    }

    /// Create a proxy backed by the Giphy API
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let backend = GiphyBackend::new(config.giphy.clone())?;
        Ok(Self::new(Arc::new(backend), &config.giphy))
    }

    /// Name of the backend in use
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Resolve an activity to a GIF using the thread-local RNG
    pub async fn resolve(&self, activity: Option<&str>) -> SearchResult<CorgiGif> {
        let (activity, candidates) = self.search(activity).await?;
        let chosen = select(&activity, &candidates, &mut rand::thread_rng())?;
        project(&activity, chosen)
    }

    /// Resolve an activity to a GIF, drawing from `rng`
    pub async fn resolve_with<R: Rng + ?Sized>(
        &self,
        activity: Option<&str>,
        rng: &mut R,
    ) -> SearchResult<CorgiGif> {
        let (activity, candidates) = self.search(activity).await?;
        let chosen = select(&activity, &candidates, rng)?;
        project(&activity, chosen)
    }

    /// Query the backend and return the effective activity with its candidates
    async fn search(&self, activity: Option<&str>) -> SearchResult<(String, Vec<GiphyGif>)> {
        let (activity, q) = build_query(activity);
        let query = SearchQuery {
            q,
            limit: self.limit,
            rating: self.rating.clone(),
            lang: self.lang.clone(),
        };

        tracing::info!("Searching {} for: {}", self.backend.name(), query.q);

        let body = self.backend.search(&query).await?;
        let response: GiphySearchResponse =
            serde_json::from_str(&body).map_err(SearchError::unexpected)?;

        let candidates = response.data.unwrap_or_default();
        if candidates.is_empty() {
            return Err(SearchError::NoResults { activity });
        }

        tracing::debug!("{} candidates for '{}'", candidates.len(), activity);
        Ok((activity, candidates))
    }
}

/// Build the effective activity and the themed query string
///
/// Blank or missing activities fall back to [`DEFAULT_ACTIVITY`].
pub fn build_query(activity: Option<&str>) -> (String, String) {
    let activity = activity
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(DEFAULT_ACTIVITY)
        .to_string();
    let query = format!("{} {}", THEME_KEYWORD, activity);
    (activity, query)
}

/// Pick one candidate uniformly at random
pub fn select<'a, R: Rng + ?Sized>(
    activity: &str,
    candidates: &'a [GiphyGif],
    rng: &mut R,
) -> SearchResult<&'a GiphyGif> {
    candidates.choose(rng).ok_or_else(|| SearchError::NoResults {
        activity: activity.to_string(),
    })
}

/// Project a candidate into the response shape
///
/// Title, page URL and rating have defaults; image URLs and the original
/// dimensions are required.
pub fn project(activity: &str, gif: &GiphyGif) -> SearchResult<CorgiGif> {
    let images = gif.images.as_ref().ok_or_else(|| missing("images"))?;
    let original = images
        .original
        .as_ref()
        .ok_or_else(|| missing("images.original"))?;
    let small = images
        .fixed_height
        .as_ref()
        .ok_or_else(|| missing("images.fixed_height"))?;

    Ok(CorgiGif {
        activity: activity.to_string(),
        title: gif.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        gif_url: original
            .url
            .clone()
            .ok_or_else(|| missing("images.original.url"))?,
        gif_url_small: small
            .url
            .clone()
            .ok_or_else(|| missing("images.fixed_height.url"))?,
        width: original
            .width
            .as_ref()
            .ok_or_else(|| missing("images.original.width"))?
            .to_string(),
        height: original
            .height
            .as_ref()
            .ok_or_else(|| missing("images.original.height"))?
            .to_string(),
        giphy_url: gif.url.clone().unwrap_or_default(),
        rating: gif
            .rating
            .clone()
            .unwrap_or_else(|| DEFAULT_RATING.to_string()),
    })
}

fn missing(field: &str) -> SearchError {
    SearchError::Unexpected(anyhow!("Giphy result is missing '{}'", field))
}
