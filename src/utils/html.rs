//! Helpers for pulling links out of provider HTML

use regex::Regex;
use url::Url;

/// Decode the HTML entities that show up inside `href` attributes
pub fn decode_href(raw: &str) -> String {
    raw.replace("&amp;", "&")
        .replace("&#38;", "&")
        .replace("&quot;", "\"")
        .replace("&#x2F;", "/")
        .replace("&#47;", "/")
}

/// Resolve a scraped link against the page it came from.
///
/// Returns `None` unless the result is an absolute `http`/`https` URL.
pub fn absolutize_link(base: &str, link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(_) => Url::parse(base).and_then(|base| base.join(link)).ok()?,
    };

    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

/// Iterate over the first capture group of every match, decoded
pub fn all_captures<'a>(pattern: &'a Regex, html: &'a str) -> impl Iterator<Item = String> + 'a {
    pattern
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|m| decode_href(m.as_str()))
        .filter(|href| !href.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_href() {
        assert_eq!(
            decode_href("https://cdn.example/v.mp4?a=1&amp;b=2"),
            "https://cdn.example/v.mp4?a=1&b=2"
        );
        assert_eq!(decode_href("https:&#x2F;&#x2F;cdn"), "https://cdn");
        assert_eq!(decode_href("plain"), "plain");
    }

    #[test]
    fn test_absolutize_link() {
        let base = "https://ttdownloader.example/search/";
        assert_eq!(
            absolutize_link(base, "https://cdn.example/v.mp4?a=1").as_deref(),
            Some("https://cdn.example/v.mp4?a=1")
        );
        assert_eq!(
            absolutize_link(base, "/dl/nowm?id=1").as_deref(),
            Some("https://ttdownloader.example/dl/nowm?id=1")
        );
        assert_eq!(
            absolutize_link(base, "dl/1.mp4").as_deref(),
            Some("https://ttdownloader.example/search/dl/1.mp4")
        );
        assert_eq!(
            absolutize_link(base, "//cdn.example/v.mp4").as_deref(),
            Some("https://cdn.example/v.mp4")
        );
        assert_eq!(absolutize_link(base, "  "), None);
        assert_eq!(absolutize_link(base, "javascript:void(0)"), None);
        assert_eq!(absolutize_link("not a base", "/dl/1.mp4"), None);
    }

    #[test]
    fn test_all_captures() {
        let re = Regex::new(r#"href="([^"]*)""#).unwrap();
        let html = r#"<a href="https://a">1</a><a href="">2</a><a href="https://b">3</a>"#;
        let links: Vec<String> = all_captures(&re, html).collect();
        assert_eq!(links, vec!["https://a", "https://b"]);
    }
}
