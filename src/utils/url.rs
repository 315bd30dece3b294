//! URL utilities for recognizing TikTok links

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Prefix a link must match to be accepted as a TikTok link.
///
/// Only the scheme and host at the start of the string are checked, so a host
/// such as `tiktok.com.example.org` also passes. Callers must not treat a match
/// as proof that the link points at TikTok.
pub const TIKTOK_URL_PATTERN: &str = r"(?i)^https?://(www\.)?(tiktok\.com|vm\.tiktok\.com)";

fn tiktok_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIKTOK_URL_PATTERN).expect("TikTok URL pattern is valid"))
}

/// Check if a string parses as an absolute URL
pub fn is_absolute_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Check if a string starts like a TikTok link
pub fn is_tiktok_url(url: &str) -> bool {
    tiktok_regex().is_match(url)
}

/// Extract the numeric video ID from a full TikTok link, if present.
///
/// Short `vm.tiktok.com` links carry no ID and return `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    segments.find(|segment| *segment == "video")?;
    segments
        .next()
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
}
