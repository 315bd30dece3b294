//! Download request types and validation

use crate::error::ValidationError;
use crate::utils::{is_absolute_url, is_tiktok_url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Requested video quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Whatever the provider serves by default
    #[default]
    Auto,
    /// 4K / 2160p
    #[serde(rename = "4k")]
    UltraHd,
    /// HD / 1080p
    Hd,
    /// SD / 720p and below
    Sd,
}

impl Quality {
    /// Get all accepted quality values
    pub fn all() -> [Quality; 4] {
        [Quality::Auto, Quality::UltraHd, Quality::Hd, Quality::Sd]
    }

    /// Wire label of this quality
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Auto => "auto",
            Quality::UltraHd => "4k",
            Quality::Hd => "hd",
            Quality::Sd => "sd",
        }
    }

    /// Check if a quality-specific variant should be preferred over the default
    pub fn wants_high_definition(&self) -> bool {
        matches!(self, Quality::UltraHd | Quality::Hd)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::all()
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| format!("expected one of auto, 4k, hd, sd, got '{}'", s))
    }
}

/// Requested media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Video,
    Audio,
}

impl MediaType {
    /// Wire label of this media type
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            _ => Err(format!("expected one of video, audio, got '{}'", s)),
        }
    }
}

/// A validated download request.
///
/// Only [`validate`] builds one from untrusted input, so holding a value means
/// the URL already passed the TikTok prefix check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub url: String,
    pub quality: Quality,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

impl DownloadRequest {
    /// Validate a link and build a request from already-typed options
    pub fn new(
        url: impl Into<String>,
        quality: Quality,
        media_type: MediaType,
    ) -> Result<Self, ValidationError> {
        let url = url.into();
        check_url(&url)?;
        Ok(Self {
            url,
            quality,
            media_type,
        })
    }
}

fn check_url(url: &str) -> Result<(), ValidationError> {
    if !is_absolute_url(url) {
        return Err(ValidationError::InvalidUrl(url.to_string()));
    }
    if !is_tiktok_url(url) {
        return Err(ValidationError::NotTikTok(url.to_string()));
    }
    Ok(())
}

/// Validate a raw request body
pub fn validate_bytes(body: &[u8]) -> Result<DownloadRequest, ValidationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationError::Malformed(format!("body is not valid JSON: {}", e)))?;
    validate(&value)
}

/// Validate an arbitrary JSON value as a download request
pub fn validate(body: &Value) -> Result<DownloadRequest, ValidationError> {
    let object = body
        .as_object()
        .ok_or_else(|| ValidationError::Malformed("expected a JSON object".to_string()))?;

    let url = match object.get("url") {
        Some(Value::String(url)) => url,
        Some(_) => return Err(ValidationError::Malformed("url must be a string".to_string())),
        None => return Err(ValidationError::Malformed("url is required".to_string())),
    };

    // Absent fields take their defaults; present fields must hold an accepted value
    let quality = match object.get("quality") {
        None => Quality::default(),
        Some(Value::String(s)) => s.parse().map_err(ValidationError::InvalidQuality)?,
        Some(other) => return Err(ValidationError::InvalidQuality(other.to_string())),
    };

    let media_type = match object.get("type") {
        None => MediaType::default(),
        Some(Value::String(s)) => s.parse().map_err(ValidationError::InvalidType)?,
        Some(other) => return Err(ValidationError::InvalidType(other.to_string())),
    };

    DownloadRequest::new(url.as_str(), quality, media_type)
}
