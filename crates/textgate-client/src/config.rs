//! Connection configuration for the Weaviate client.

use crate::error::Result;

/// Default request timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Weaviate connection configuration.
#[derive(Debug, Clone)]
pub struct WeaviateConfig {
    /// Base URL of the Weaviate instance (e.g. `http://localhost:8080`).
    pub url: String,
    /// API key forwarded to the embedded vectorizer/generative provider as
    /// the `X-OpenAI-Api-Key` header.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl WeaviateConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the vectorizer API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Builds a configuration from `WEAVIATE_URL`, `OPENAI_API_KEY` and
    /// `WEAVIATE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("WEAVIATE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let api_key = std::env::var("OPENAI_API_KEY").ok();

        let timeout_secs = std::env::var("WEAVIATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            url,
            api_key,
            timeout_secs,
        })
    }
}

impl Default for WeaviateConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
