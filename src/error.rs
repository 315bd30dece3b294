//! Error types for ttget

use thiserror::Error;

/// Reasons a download request is rejected before any provider is contacted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed request body: {0}")]
    Malformed(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Not a TikTok link: {0}")]
    NotTikTok(String),

    #[error("Invalid quality: {0}")]
    InvalidQuality(String),

    #[error("Invalid media type: {0}")]
    InvalidType(String),
}

/// Failure of a single provider attempt. Never crosses the resolver boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Provider rejected the link: {0}")]
    Rejected(String),
}

impl ProviderError {
    /// Check if the failure happened at the transport level
    pub fn is_transport(&self) -> bool {
        matches!(self, ProviderError::Http(_) | ProviderError::Status(_))
    }
}

/// Failure of a whole resolution chain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No provider could resolve the link ({attempted} attempted)")]
    Exhausted { attempted: usize },
}

/// Main error type for ttget operations
#[derive(Debug, Error)]
pub enum TtError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TtError {
    /// Check if error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, TtError::Validation(_))
    }

    /// Check if error means every provider was tried without success
    pub fn is_exhausted(&self) -> bool {
        matches!(self, TtError::Resolve(ResolveError::Exhausted { .. }))
    }

    /// HTTP status code the endpoint answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            TtError::Validation(_) => 400,
            // Exhaustion is a normal business outcome, not a server fault
            TtError::Resolve(_) => 200,
            _ => 500,
        }
    }
}
