//! Wire types
//!
//! Upstream Giphy payload shapes and the normalized response returned to
//! callers. Upstream fields are all optional here; the proxy decides which
//! ones are required when it projects a chosen candidate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameters accepted by `GET /api/corgi`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// What the corgi should be doing (e.g. "running", "sleeping")
    pub activity: Option<String>,
}

impl SearchRequest {
    /// Build from raw query pairs; a repeated `activity` keeps its first value
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let activity = pairs
            .into_iter()
            .find(|(key, _)| key == "activity")
            .map(|(_, value)| value);
        Self { activity }
    }
}

/// A corgi GIF picked for an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorgiGif {
    /// The activity that was searched for
    pub activity: String,
    /// GIF title
    pub title: String,
    /// URL of the original rendition
    pub gif_url: String,
    /// URL of the fixed-height rendition
    pub gif_url_small: String,
    /// Width of the original rendition
    pub width: String,
    /// Height of the original rendition
    pub height: String,
    /// Giphy page for the GIF
    pub giphy_url: String,
    /// Content rating
    pub rating: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

// Giphy API response types

/// Top-level Giphy search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiphySearchResponse {
    pub data: Option<Vec<GiphyGif>>,
}

/// A single search candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiphyGif {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<String>,
    pub images: Option<GiphyImages>,
}

/// Renditions of a candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiphyImages {
    pub original: Option<GiphyImage>,
    pub fixed_height: Option<GiphyImage>,
}

/// One rendition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiphyImage {
    pub url: Option<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

/// A pixel dimension; Giphy sends these as strings, but numbers are accepted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Text(String),
    Number(u64),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Text(s) => f.write_str(s),
            Dimension::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_accepts_string_and_number() {
        let image: GiphyImage =
            serde_json::from_str(r#"{"url": "u", "width": "480", "height": 270}"#).unwrap();
        assert_eq!(image.width.unwrap().to_string(), "480");
        assert_eq!(image.height.unwrap().to_string(), "270");
    }

    #[test]
    fn test_missing_data_parses_as_none() {
        let response: GiphySearchResponse =
            serde_json::from_str(r#"{"meta": {"status": 200}}"#).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_search_request_keeps_first_activity() {
        let pairs = vec![
            ("limit".to_string(), "3".to_string()),
            ("activity".to_string(), "running".to_string()),
            ("activity".to_string(), "sleeping".to_string()),
        ];
        assert_eq!(
            SearchRequest::from_pairs(pairs).activity.as_deref(),
            Some("running")
        );
        assert!(SearchRequest::from_pairs(Vec::new()).activity.is_none());
    }

    #[test]
    fn test_error_response_skips_empty_fields() {
        let body = ErrorResponse {
            error: "boom".to_string(),
            suggestion: None,
            details: Some("cause".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "boom", "details": "cause"}));
    }
}
