//! Media kind detection from links returned by providers

use crate::core::MediaType;
use url::Url;

/// Get the media type for a file extension
pub fn media_type_from_ext(extension: &str) -> Option<MediaType> {
    let ext = extension.trim_start_matches('.').to_lowercase();
    match ext.as_str() {
        // Video formats
        "mp4" | "webm" | "mov" | "m4v" | "mkv" => Some(MediaType::Video),

        // Audio formats
        "mp3" | "m4a" | "aac" | "ogg" | "opus" | "wav" => Some(MediaType::Audio),

        _ => None,
    }
}

/// Guess the media type of a link from the extension of its last path segment.
///
/// CDN links often carry no extension at all; those return `None` and the
/// caller decides from context.
pub fn media_type_from_url(url: &str) -> Option<MediaType> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let file_name = path.rsplit('/').next()?;
    let (_, ext) = file_name.rsplit_once('.')?;
    media_type_from_ext(ext)
}
