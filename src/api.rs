//! API client for the document-analysis backend
//!
//! Fetches pre-computed fraud signals and extracted insight fields over two
//! read-only JSON endpoints. Calls are blocking and are expected to run on
//! the background executor, never on the UI thread.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// One named fraud-risk indicator with its categorical outcome.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signal {
    pub id: i64,
    pub signal: String,
    pub status: String,
}

/// One extracted free-text field from document analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsightField {
    pub value: String,
}

/// API error types. Failures are logged but never surfaced to the user; the
/// calling view keeps its loading placeholders instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the analysis backend.
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the extracted insight fields for the analyzed document.
    pub fn insights(&self) -> Result<Vec<InsightField>, ApiError> {
        self.get_json("/insights")
    }

    /// Get the fraud signals for the analyzed document.
    pub fn fraud_signals(&self) -> Result<Vec<Signal>, ApiError> {
        self.get_json("/fraud-data")
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "fetching");
        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }
}
