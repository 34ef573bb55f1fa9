//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no domain data; it only needs the outbound HTTP client and the
//! upstream base URL for the `/api` proxy.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors building the shared state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Shared application state. Clone is required by Axum; all fields are cheap clones.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream REST base URL, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`StateError`] if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: Arc::from(config.api_upstream.as_str()) })
    }
}
