//! snaptik.app HTML adapter

use crate::core::{DownloadResult, MediaType, Quality};
use crate::error::ProviderError;
use crate::platform::client::ProviderClient;
use crate::platform::provider::Provider;
use crate::platform::scrape::HtmlLinkExtractor;
use async_trait::async_trait;

/// Download buttons carry a `download` attribute or class
const DOWNLOAD_ATTR_PATTERN: &str = r#"(?i)<a[^>]+href="([^"]+)"[^>]*download[^>]*>"#;

/// Adapter scraping the snaptik result fragment
pub struct SnaptikProvider {
    client: ProviderClient,
    endpoint: String,
    extractor: HtmlLinkExtractor,
}

impl SnaptikProvider {
    pub fn new(client: ProviderClient, endpoint: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            extractor: HtmlLinkExtractor::new(DOWNLOAD_ATTR_PATTERN)?,
        })
    }
}

#[async_trait]
impl Provider for SnaptikProvider {
    fn name(&self) -> &str {
        "snaptik"
    }

    async fn attempt(
        &self,
        url: &str,
        quality: Quality,
        media_type: MediaType,
    ) -> Result<Option<DownloadResult>, ProviderError> {
        let html = self.client.post_form(&self.endpoint, &[("url", url)]).await?;
        Ok(self.extractor.extract(&html, &self.endpoint, quality, media_type))
    }
}
