//! Shared application state

use crate::proxy::SearchProxy;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "corgi-gif-service";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Search proxy shared by all requests
    pub proxy: SearchProxy,
}

impl AppState {
    /// Create new app state
    pub fn new(proxy: SearchProxy) -> Self {
        Self { proxy }
    }
}
