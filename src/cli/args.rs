//! Command line argument parsing

use crate::core::{MediaType, Quality, ResolverConfig};
use crate::platform::{ProviderKind, ProviderSpec, DEFAULT_USER_AGENT};
use crate::server::DEFAULT_BIND;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

/// ttget - resolve TikTok links to watermark-free download links
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (only errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Resolve a single link and print the media URL
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, env = "TTGET_ADDR", default_value = DEFAULT_BIND)]
    pub addr: SocketAddr,

    #[command(flatten)]
    pub providers: ProviderArgs,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// TikTok video URL
    pub url: String,

    /// Requested quality (auto, 4k, hd, sd)
    #[arg(long, default_value = "auto")]
    pub quality: Quality,

    /// Requested media (video, audio)
    #[arg(long = "type", value_name = "TYPE", default_value = "video")]
    pub media_type: MediaType,

    #[command(flatten)]
    pub providers: ProviderArgs,
}

/// Provider chain and outbound HTTP settings
#[derive(clap::Args, Debug)]
pub struct ProviderArgs {
    /// Timeout for each provider call (e.g., 10s, 1m)
    #[arg(long, env = "TTGET_TIMEOUT", value_name = "DURATION", default_value = "10s")]
    pub timeout: humantime::Duration,

    /// User-Agent header sent to providers
    #[arg(long, env = "TTGET_USER_AGENT", value_name = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Provider to try, in order; repeat or comma-separate (default: tikwm,ttdownloader,snaptik)
    #[arg(long = "provider", env = "TTGET_PROVIDERS", value_name = "NAME", value_delimiter = ',')]
    pub providers: Vec<ProviderKind>,

    /// Override the tikwm endpoint
    #[arg(long, value_name = "URL")]
    pub tikwm_endpoint: Option<String>,

    /// Override the ttdownloader endpoint
    #[arg(long, value_name = "URL")]
    pub ttdownloader_endpoint: Option<String>,

    /// Override the snaptik endpoint
    #[arg(long, value_name = "URL")]
    pub snaptik_endpoint: Option<String>,
}

impl ProviderArgs {
    /// Get provider call timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }

    fn endpoint_override(&self, kind: ProviderKind) -> Option<&String> {
        match kind {
            ProviderKind::Tikwm => self.tikwm_endpoint.as_ref(),
            ProviderKind::TtDownloader => self.ttdownloader_endpoint.as_ref(),
            ProviderKind::Snaptik => self.snaptik_endpoint.as_ref(),
        }
    }

    /// Build the resolver configuration
    pub fn resolver_config(&self) -> ResolverConfig {
        let kinds = if self.providers.is_empty() {
            ProviderKind::all()
        } else {
            self.providers.clone()
        };

        let providers = kinds
            .into_iter()
            .map(|kind| match self.endpoint_override(kind) {
                Some(endpoint) => ProviderSpec::new(kind).with_endpoint(endpoint.clone()),
                None => ProviderSpec::new(kind),
            })
            .collect();

        ResolverConfig::default()
            .with_providers(providers)
            .with_timeout(self.timeout_duration())
            .with_user_agent(self.user_agent.clone())
    }
}

impl Args {
    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}

impl VerbosityLevel {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "info",
            VerbosityLevel::Verbose => "debug",
        }
    }
}
