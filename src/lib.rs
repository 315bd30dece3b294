//! # ttget - TikTok link resolver
//!
//! Turns a TikTok video link into a direct, watermark-free download link by
//! asking third-party extraction services in turn.
//!
//! ## Features
//!
//! - Request validation with defaults for quality and media type
//! - Ordered provider fallback (JSON API and HTML scrapers)
//! - Uniform JSON responses over a small HTTP API
//! - One-shot resolution from the command line
//!
//! ## Example
//!
//! ```rust,no_run
//! use ttget::{MediaType, Quality, Resolver, ResolverConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = Resolver::from_config(&ResolverConfig::default())?;
//!
//!     let result = resolver
//!         .resolve("https://www.tiktok.com/@user/video/123", Quality::Hd, MediaType::Video)
//!         .await?;
//!     println!("Download: {}", result.media.url());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod platform;
pub mod server;
pub mod utils;

// Re-export main types
pub use crate::core::{
    validate, DownloadRequest, DownloadResponse, DownloadResult, Locale, Media, MediaType,
    Quality, Resolver, ResolverConfig,
};
pub use crate::error::{ProviderError, ResolveError, TtError, ValidationError};
pub use crate::platform::{Provider, ProviderKind, ProviderSpec};

/// Result type alias for ttget operations
pub type Result<T> = std::result::Result<T, TtError>;
