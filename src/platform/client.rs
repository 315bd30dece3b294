//! HTTP client shared by all provider adapters

use crate::error::{ProviderError, TtError};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, warn};

/// User agent sent to every provider
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default bound on a single provider call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Per-request timeout, covering connect and body
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Thin wrapper around a pooled [`reqwest::Client`].
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
}

impl ProviderClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, TtError> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self, TtError> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| TtError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// POST a form to a provider endpoint and return the body of a 2xx answer
    pub async fn post_form(
        &self,
        endpoint: &str,
        form: &[(&str, &str)],
    ) -> Result<String, ProviderError> {
        debug!("POST {} ({} form fields)", endpoint, form.len());

        let response = self.client.post(endpoint).form(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider endpoint {} answered with status {}", endpoint, status);
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
