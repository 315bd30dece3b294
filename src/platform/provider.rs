//! Provider trait and provider selection

use crate::core::{DownloadResult, MediaType, Quality};
use crate::error::{ProviderError, TtError};
use crate::platform::client::ProviderClient;
use crate::platform::{SnaptikProvider, TikwmProvider, TtDownloaderProvider};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A third-party service able to turn a TikTok link into a direct media link
#[async_trait]
pub trait Provider: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &str;

    /// Try to resolve one link.
    ///
    /// `Ok(None)` means the provider answered but offered nothing usable for
    /// the requested media type.
    async fn attempt(
        &self,
        url: &str,
        quality: Quality,
        media_type: MediaType,
    ) -> Result<Option<DownloadResult>, ProviderError>;
}

/// Known provider adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Tikwm,
    TtDownloader,
    Snaptik,
}

impl ProviderKind {
    /// Default provider chain, in the order it is tried
    pub fn all() -> Vec<ProviderKind> {
        vec![
            ProviderKind::Tikwm,
            ProviderKind::TtDownloader,
            ProviderKind::Snaptik,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Tikwm => "tikwm",
            ProviderKind::TtDownloader => "ttdownloader",
            ProviderKind::Snaptik => "snaptik",
        }
    }

    /// Public endpoint of the provider
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Tikwm => "https://www.tikwm.com/api/",
            ProviderKind::TtDownloader => "https://ttdownloader.com/",
            ProviderKind::Snaptik => "https://snaptik.app/abc2.php",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tikwm" => Ok(ProviderKind::Tikwm),
            "ttdownloader" => Ok(ProviderKind::TtDownloader),
            "snaptik" => Ok(ProviderKind::Snaptik),
            other => Err(format!(
                "unknown provider '{}', expected one of tikwm, ttdownloader, snaptik",
                other
            )),
        }
    }
}

/// One entry of the provider chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSpec {
    pub kind: ProviderKind,
    pub endpoint: String,
}

impl ProviderSpec {
    /// Provider at its public endpoint
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            endpoint: kind.default_endpoint().to_string(),
        }
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the adapter for this entry
    pub fn build(&self, client: ProviderClient) -> Result<Arc<dyn Provider>, TtError> {
        let provider: Arc<dyn Provider> = match self.kind {
            ProviderKind::Tikwm => Arc::new(TikwmProvider::new(client, &self.endpoint)),
            ProviderKind::TtDownloader => {
                Arc::new(TtDownloaderProvider::new(client, &self.endpoint)?)
            }
            ProviderKind::Snaptik => Arc::new(SnaptikProvider::new(client, &self.endpoint)?),
        };
        Ok(provider)
    }
}
