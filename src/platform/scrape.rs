//! Link extraction from provider HTML pages
//!
//! Providers that answer with HTML are scraped with a small set of patterns.
//! Quality is guessed from keywords in the anchor markup ("hd", "1080p",
//! "high", "4k", "2160p"). The guess depends entirely on how each page labels
//! its buttons and can silently mislabel a link when the markup changes.

use crate::core::{DownloadResult, MediaType, Quality};
use crate::error::ProviderError;
use crate::utils::{absolutize_link, all_captures, decode_href, media_type_from_url};
use regex::Regex;

const MP4_LINK_PATTERN: &str = r#"(?i)href="([^"]*\.mp4[^"]*)""#;
const MP3_LINK_PATTERN: &str = r#"(?i)href="([^"]*\.mp3[^"]*)""#;
const ANCHOR_PATTERN: &str = r#"(?is)<a\s[^>]*href="([^"]+)"[^>]*>.*?</a>"#;
const HD_KEYWORDS: &str = r"(?i)\b(?:hd|1080p|high)\b";
const UHD_KEYWORDS: &str = r"(?i)\b(?:4k|2160p|uhd)\b";

/// Compiled patterns for one HTML provider
#[derive(Debug, Clone)]
pub struct HtmlLinkExtractor {
    primary: Regex,
    mp4: Regex,
    mp3: Regex,
    anchor: Regex,
    hd: Regex,
    uhd: Regex,
}

impl HtmlLinkExtractor {
    /// Create an extractor around the provider's main download-link pattern.
    ///
    /// The pattern's first capture group must be the link.
    pub fn new(primary_pattern: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            primary: Regex::new(primary_pattern)?,
            mp4: Regex::new(MP4_LINK_PATTERN)?,
            mp3: Regex::new(MP3_LINK_PATTERN)?,
            anchor: Regex::new(ANCHOR_PATTERN)?,
            hd: Regex::new(HD_KEYWORDS)?,
            uhd: Regex::new(UHD_KEYWORDS)?,
        })
    }

    /// Pick the link answering the request, if the page has one.
    ///
    /// Relative links are resolved against `base`, the page's own URL.
    pub fn extract(
        &self,
        html: &str,
        base: &str,
        quality: Quality,
        media_type: MediaType,
    ) -> Option<DownloadResult> {
        match media_type {
            MediaType::Audio => all_captures(&self.mp3, html)
                .find_map(|href| absolutize_link(base, &href))
                .map(DownloadResult::audio),
            MediaType::Video => self.extract_video(html, base, quality),
        }
    }

    fn extract_video(&self, html: &str, base: &str, quality: Quality) -> Option<DownloadResult> {
        if quality == Quality::UltraHd {
            if let Some(url) = self.find_labelled(html, base, &self.uhd) {
                return Some(DownloadResult::video(url, Quality::UltraHd.as_str()));
            }
        }

        if quality.wants_high_definition() {
            if let Some(url) = self.find_labelled(html, base, &self.hd) {
                return Some(DownloadResult::video(url, Quality::Hd.as_str()));
            }
        }

        all_captures(&self.primary, html)
            .chain(all_captures(&self.mp4, html))
            .filter(|href| is_video_link(href))
            .find_map(|href| absolutize_link(base, &href))
            .map(|url| DownloadResult::video(url, Quality::Auto.as_str()))
    }

    /// First download anchor whose markup mentions one of the keywords
    fn find_labelled(&self, html: &str, base: &str, keywords: &Regex) -> Option<String> {
        self.anchor
            .captures_iter(html)
            .filter(|captures| {
                captures.get(0).is_some_and(|m| {
                    keywords.is_match(m.as_str()) && self.is_download_anchor(m.as_str())
                })
            })
            .filter_map(|captures| captures.get(1))
            .map(|m| decode_href(m.as_str()))
            .filter(|href| is_video_link(href))
            .find_map(|href| absolutize_link(base, &href))
    }

    /// Anchors outside the provider's download buttons (navigation, help
    /// pages) never count, whatever their label says
    fn is_download_anchor(&self, anchor: &str) -> bool {
        self.primary.is_match(anchor) || self.mp4.is_match(anchor)
    }
}

/// Anything not recognizably audio and not a page fragment counts as video
fn is_video_link(url: &str) -> bool {
    !url.starts_with('#')
        && !url.starts_with("javascript:")
        && media_type_from_url(url) != Some(MediaType::Audio)
}
