//! Error types for corgi GIF searches

use thiserror::Error;

/// Errors that can occur while resolving an activity to a GIF
#[derive(Error, Debug)]
pub enum SearchError {
    /// The upstream call failed, timed out, or returned a non-success status
    #[error("failed to fetch GIF from Giphy: {0}")]
    Fetch(#[source] anyhow::Error),

    /// The upstream search returned no candidates
    #[error("No corgi GIFs found for activity: {activity}")]
    NoResults {
        /// The activity that was searched for
        activity: String,
    },

    /// The upstream payload was malformed or something else went wrong
    #[error("unexpected error: {0}")]
    Unexpected(#[source] anyhow::Error),
}

impl SearchError {
    /// Wrap a transport-level failure
    pub fn fetch(err: impl Into<anyhow::Error>) -> Self {
        Self::Fetch(err.into())
    }

    /// Wrap a malformed-payload failure
    pub fn unexpected(err: impl Into<anyhow::Error>) -> Self {
        Self::Unexpected(err.into())
    }
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
