//! Sequential provider fallback

use crate::core::request::{DownloadRequest, MediaType, Quality};
use crate::core::response::DownloadResult;
use crate::error::{ResolveError, TtError};
use crate::platform::{HttpClientConfig, Provider, ProviderClient, ProviderKind, ProviderSpec};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Resolver configuration, read-only once the resolver is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Providers in the order they are tried
    pub providers: Vec<ProviderSpec>,
    /// Outbound HTTP settings
    pub http: HttpClientConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            providers: ProviderKind::all().into_iter().map(ProviderSpec::new).collect(),
            http: HttpClientConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Replace the provider chain
    pub fn with_providers(mut self, providers: Vec<ProviderSpec>) -> Self {
        self.providers = providers;
        self
    }

    /// Set per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http.user_agent = user_agent.into();
        self
    }
}

/// Tries providers one after another until one yields a usable link
pub struct Resolver {
    providers: Vec<Arc<dyn Provider>>,
}

impl Resolver {
    /// Create a resolver over an explicit provider chain
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Build the provider chain described by a configuration
    pub fn from_config(config: &ResolverConfig) -> Result<Self, TtError> {
        if config.providers.is_empty() {
            return Err(TtError::Config("provider chain is empty".to_string()));
        }

        let client = ProviderClient::with_config(config.http.clone())?;
        let providers = config
            .providers
            .iter()
            .map(|spec| spec.build(client.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(providers))
    }

    /// Names of the providers, in order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Resolve a validated request
    pub async fn resolve_request(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadResult, ResolveError> {
        self.resolve(&request.url, request.quality, request.media_type)
            .await
    }

    /// Try every provider in order and return the first matching result.
    ///
    /// Provider failures are logged and skipped. Only running out of
    /// providers is reported to the caller.
    pub async fn resolve(
        &self,
        url: &str,
        quality: Quality,
        media_type: MediaType,
    ) -> Result<DownloadResult, ResolveError> {
        info!("Resolving {} link ({} quality): {}", media_type, quality, url);

        for (index, provider) in self.providers.iter().enumerate() {
            let name = provider.name();
            info!(provider = name, "Trying provider {}/{}", index + 1, self.providers.len());

            match provider.attempt(url, quality, media_type).await {
                Ok(Some(result)) if result.matches(media_type) => {
                    info!(provider = name, quality = %result.quality, "Provider resolved link");
                    return Ok(result);
                }
                Ok(Some(result)) => {
                    warn!(
                        provider = name,
                        "Provider returned {} instead of {}, skipping",
                        result.media_type(),
                        media_type
                    );
                }
                Ok(None) => {
                    info!(provider = name, "Provider found no {} link", media_type);
                }
                Err(e) if e.is_transport() => {
                    warn!(provider = name, error = %e, "Provider unreachable");
                }
                Err(e) => {
                    info!(provider = name, error = %e, "Provider could not resolve link");
                }
            }
        }

        debug!("All {} providers exhausted for {}", self.providers.len(), url);
        Err(ResolveError::Exhausted {
            attempted: self.providers.len(),
        })
    }
}
