//! ttdownloader.com HTML adapter

use crate::core::{DownloadResult, MediaType, Quality};
use crate::error::ProviderError;
use crate::platform::client::ProviderClient;
use crate::platform::provider::Provider;
use crate::platform::scrape::HtmlLinkExtractor;
use async_trait::async_trait;

/// The result page labels the watermark-free link with a plain "Download" button
const DOWNLOAD_BUTTON_PATTERN: &str = r#"(?i)<a[^>]+href="([^"]+)"[^>]*>Download</a>"#;

/// Adapter scraping the ttdownloader result page
pub struct TtDownloaderProvider {
    client: ProviderClient,
    endpoint: String,
    extractor: HtmlLinkExtractor,
}

impl TtDownloaderProvider {
    pub fn new(client: ProviderClient, endpoint: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            extractor: HtmlLinkExtractor::new(DOWNLOAD_BUTTON_PATTERN)?,
        })
    }
}

#[async_trait]
impl Provider for TtDownloaderProvider {
    fn name(&self) -> &str {
        "ttdownloader"
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

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://vm.tiktok.com/ZMabc/";

    const RESULT_PAGE: &str = r#"
        <div class="results">
          <div class="download-link">
            <a class="download-link" href="https://dl.ttdownloader.example/nowm?token=a&amp;id=1" rel="nofollow">Download</a>
          </div>
          <div class="download-link">
            <a href="https://dl.ttdownloader.example/mp3/abc.mp3" rel="nofollow">Download MP3</a>
          </div>
        </div>
    "#;

    async fn provider_with(status: usize, body: &str) -> (mockito::ServerGuard, TtDownloaderProvider) {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_body(mockito::Matcher::UrlEncoded("url".into(), LINK.into()))
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;
        let provider =
            TtDownloaderProvider::new(ProviderClient::new().unwrap(), &format!("{}/", server.url()))
                .unwrap();
        (server, provider)
    }

    #[tokio::test]
    async fn test_video_link() {
        let (_server, provider) = provider_with(200, RESULT_PAGE).await;
        let result = provider.attempt(LINK, Quality::Auto, MediaType::Video).await.unwrap();
        assert_eq!(
            result,
            Some(DownloadResult::video(
                "https://dl.ttdownloader.example/nowm?token=a&id=1",
                "auto"
            ))
        );
    }

    #[tokio::test]
    async fn test_audio_link() {
        let (_server, provider) = provider_with(200, RESULT_PAGE).await;
        let result = provider.attempt(LINK, Quality::Auto, MediaType::Audio).await.unwrap();
        assert_eq!(
            result,
            Some(DownloadResult::audio("https://dl.ttdownloader.example/mp3/abc.mp3"))
        );
    }

    #[tokio::test]
    async fn test_relative_link_joined_onto_endpoint() {
        let (server, provider) =
            provider_with(200, r#"<a class="btn" href="/dl/nowm?id=1">Download</a>"#).await;
        let result = provider.attempt(LINK, Quality::Auto, MediaType::Video).await.unwrap();
        assert_eq!(
            result,
            Some(DownloadResult::video(format!("{}/dl/nowm?id=1", server.url()), "auto"))
        );
    }

    #[tokio::test]
    async fn test_sd_takes_plain_button() {
        let html = concat!(
            r#"<a href="https://dl.ttdownloader.example/sd.mp4">Download</a>"#,
            r#"<a href="https://dl.ttdownloader.example/hd.mp4" title="HD">Download</a>"#,
        );
        let (_server, provider) = provider_with(200, html).await;
        let result = provider.attempt(LINK, Quality::Sd, MediaType::Video).await.unwrap();
        assert_eq!(
            result,
            Some(DownloadResult::video("https://dl.ttdownloader.example/sd.mp4", "auto"))
        );
    }

    #[tokio::test]
    async fn test_page_without_links() {
        let (_server, provider) = provider_with(200, "<p>Invalid link</p>").await;
        let result = provider.attempt(LINK, Quality::Hd, MediaType::Video).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_server_error() {
        let (_server, provider) = provider_with(500, "oops").await;
        let err = provider.attempt(LINK, Quality::Auto, MediaType::Video).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status(500)));
    }
}
