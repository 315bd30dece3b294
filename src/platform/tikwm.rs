//! tikwm.com JSON API adapter

use crate::core::{DownloadResult, MediaType, Quality};
use crate::error::ProviderError;
use crate::platform::client::ProviderClient;
use crate::platform::provider::Provider;
use crate::utils::absolutize_link;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Media fields of a tikwm answer
#[derive(Debug, Default, Deserialize)]
struct TikwmMedia {
    /// Watermark-free video at the default quality
    play: Option<String>,
    /// Watermark-free HD video, when available
    hdplay: Option<String>,
    /// Soundtrack
    music: Option<String>,
}

/// tikwm answers either with a `{code, msg, data}` envelope or with the media
/// fields at the top level
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TikwmBody {
    Envelope {
        code: i64,
        #[serde(default)]
        msg: Option<String>,
        #[serde(default)]
        data: Option<TikwmMedia>,
    },
    Flat(TikwmMedia),
}

/// Adapter for the tikwm API
pub struct TikwmProvider {
    client: ProviderClient,
    endpoint: String,
}

impl TikwmProvider {
    pub fn new(client: ProviderClient, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Parse an answer body into its media fields
    fn parse(body: &str) -> Result<TikwmMedia, ProviderError> {
        match serde_json::from_str::<TikwmBody>(body)? {
            TikwmBody::Envelope { code: 0, data, .. } => Ok(data.unwrap_or_default()),
            TikwmBody::Envelope { code, msg, .. } => Err(ProviderError::Rejected(format!(
                "code {}: {}",
                code,
                msg.unwrap_or_default()
            ))),
            TikwmBody::Flat(media) => Ok(media),
        }
    }

    fn select(&self, media: TikwmMedia, quality: Quality, media_type: MediaType) -> Option<DownloadResult> {
        match media_type {
            MediaType::Audio => media
                .music
                .and_then(|url| absolutize_link(&self.endpoint, &url))
                .map(DownloadResult::audio),
            MediaType::Video => {
                let hd = media
                    .hdplay
                    .and_then(|url| absolutize_link(&self.endpoint, &url))
                    .map(|url| DownloadResult::video(url, Quality::Hd.as_str()));
                let default = media
                    .play
                    .and_then(|url| absolutize_link(&self.endpoint, &url))
                    .map(|url| DownloadResult::video(url, Quality::Auto.as_str()));

                if quality.wants_high_definition() {
                    hd.or(default)
                } else {
                    default.or(hd)
                }
            }
        }
    }
}

#[async_trait]
impl Provider for TikwmProvider {
    fn name(&self) -> &str {
        "tikwm"
    }

    async fn attempt(
        &self,
        url: &str,
        quality: Quality,
        media_type: MediaType,
    ) -> Result<Option<DownloadResult>, ProviderError> {
        let body = self
            .client
            .post_form(&self.endpoint, &[("url", url), ("hd", "1")])
            .await?;

        let media = Self::parse(&body)?;
        debug!(
            "tikwm fields: play={} hdplay={} music={}",
            media.play.is_some(),
            media.hdplay.is_some(),
            media.music.is_some()
        );

        Ok(self.select(media, quality, media_type))
    }
}
