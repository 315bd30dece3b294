//! Provider results and the response contract of the download endpoint

use crate::core::messages::Locale;
use crate::core::request::MediaType;
use crate::error::TtError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// A direct media link of a known kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Video(String),
    Audio(String),
}

impl Media {
    /// Kind of media behind the link
    pub fn media_type(&self) -> MediaType {
        match self {
            Media::Video(_) => MediaType::Video,
            Media::Audio(_) => MediaType::Audio,
        }
    }

    /// The direct link
    pub fn url(&self) -> &str {
        match self {
            Media::Video(url) | Media::Audio(url) => url,
        }
    }
}

/// Normalized outcome of one successful provider attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub media: Media,
    /// Quality label of the returned variant ("hd", "auto", "audio", ...)
    pub quality: String,
}

impl DownloadResult {
    /// Video result with the quality label of the variant found
    pub fn video(url: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            media: Media::Video(url.into()),
            quality: quality.into(),
        }
    }

    /// Audio result
    pub fn audio(url: impl Into<String>) -> Self {
        Self {
            media: Media::Audio(url.into()),
            quality: "audio".to_string(),
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.media.media_type()
    }

    /// Check if this result answers a request for the given media type
    pub fn matches(&self, media_type: MediaType) -> bool {
        self.media_type() == media_type
    }
}

/// Body of every `/api/download` answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadResponse {
    /// Successful response for a request of the given media type
    pub fn success(result: DownloadResult, media_type: MediaType) -> Self {
        let (download_url, audio_url) = match result.media {
            Media::Video(url) => (Some(url), None),
            Media::Audio(url) => (None, Some(url)),
        };

        Self {
            success: true,
            download_url,
            audio_url,
            quality: Some(result.quality),
            media_type: Some(media_type),
            error: None,
        }
    }

    /// Failed response carrying a user-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            download_url: None,
            audio_url: None,
            quality: None,
            media_type: None,
            error: Some(message.into()),
        }
    }
}

/// Build the HTTP status and body for the outcome of a download request
pub fn respond(
    outcome: Result<DownloadResult, TtError>,
    media_type: MediaType,
    locale: Locale,
) -> (u16, DownloadResponse) {
    match outcome {
        Ok(result) => (200, DownloadResponse::success(result, media_type)),
        Err(err) => {
            let message = if err.is_validation() {
                locale.invalid_link()
            } else if err.is_exhausted() {
                locale.unavailable()
            } else {
                error!("Download request failed: {}", err);
                locale.internal_error()
            };
            (err.status_code(), DownloadResponse::failure(message))
        }
    }
}
