//! User-facing messages returned in failed responses

/// Language of user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Pick a locale from an `Accept-Language` header value.
    ///
    /// Only the first listed tag is considered. English tags select English,
    /// everything else falls back to French.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let first_tag = header
            .and_then(|value| value.split(',').next())
            .map(|tag| tag.split(';').next().unwrap_or_default().trim().to_lowercase())
            .unwrap_or_default();

        if first_tag == "en" || first_tag.starts_with("en-") {
            Locale::En
        } else {
            Locale::Fr
        }
    }

    /// Message for a request whose link was rejected
    pub fn invalid_link(&self) -> &'static str {
        match self {
            Locale::Fr => "Lien TikTok invalide. Assurez-vous que l'URL est correcte.",
            Locale::En => "Invalid TikTok link. Make sure the URL is correct.",
        }
    }

    /// Message for a link no provider could resolve
    pub fn unavailable(&self) -> &'static str {
        match self {
            Locale::Fr => "Impossible de traiter cette vidéo pour le moment. Vérifiez que le lien est correct et que la vidéo est publique, puis réessayez plus tard.",
            Locale::En => "Unable to process this video right now. Check that the link is correct and the video is public, then try again later.",
        }
    }

    /// Message for an unexpected server failure
    pub fn internal_error(&self) -> &'static str {
        match self {
            Locale::Fr => "Erreur interne du serveur. Veuillez réessayer plus tard.",
            Locale::En => "Internal server error. Please try again later.",
        }
    }
}
