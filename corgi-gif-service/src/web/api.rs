//! REST API handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::state::{AppState, SERVICE_NAME};
use crate::error::SearchError;
use crate::types::{CorgiGif, ErrorResponse, HealthResponse, SearchRequest};

const NO_RESULTS_SUGGESTION: &str = "Try a different activity like running, sleeping, or playing";

impl ErrorResponse {
    fn new(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            suggestion: None,
            details: None,
        }
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Map a search failure to its status code and JSON body
pub fn error_response(err: &SearchError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        SearchError::NoResults { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(err.to_string()).with_suggestion(NO_RESULTS_SUGGESTION)),
        ),
        SearchError::Fetch(cause) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(
                ErrorResponse::new("Failed to fetch GIF from Giphy")
                    .with_details(format!("{:#}", cause)),
            ),
        ),
        SearchError::Unexpected(cause) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(
                ErrorResponse::new("An unexpected error occurred")
                    .with_details(format!("{:#}", cause)),
            ),
        ),
    }
}

/// Find a random corgi GIF for an activity
pub async fn get_corgi(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CorgiGif>, (StatusCode, Json<ErrorResponse>)> {
    let params = SearchRequest::from_pairs(pairs);
    match state.proxy.resolve(params.activity.as_deref()).await {
        Ok(gif) => Ok(Json(gif)),
        Err(e) => {
            match &e {
                SearchError::NoResults { .. } => tracing::info!("{}", e),
                _ => tracing::error!("Corgi search failed: {:#}", e),
            }
            Err(error_response(&e))
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_no_results_maps_to_not_found() {
        let (status, Json(body)) = error_response(&SearchError::NoResults {
            activity: "knitting".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "No corgi GIFs found for activity: knitting");
        assert_eq!(body.suggestion.as_deref(), Some(NO_RESULTS_SUGGESTION));
        assert!(body.details.is_none());
    }

    #[test]
    fn test_fetch_maps_to_internal_error_with_details() {
        let (status, Json(body)) = error_response(&SearchError::fetch(anyhow!("timed out")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to fetch GIF from Giphy");
        assert_eq!(body.details.as_deref(), Some("timed out"));
        assert!(body.suggestion.is_none());
    }

    #[test]
    fn test_unexpected_maps_to_internal_error() {
        let (status, Json(body)) = error_response(&SearchError::unexpected(anyhow!("bad json")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "An unexpected error occurred");
        assert_eq!(body.details.as_deref(), Some("bad json"));
    }
}
