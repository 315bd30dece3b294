//! Main entry point for ttget CLI

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttget::cli::{Args, Command, OutputFormatter, ResolveArgs, ServeArgs, VerbosityLevel};
use ttget::core::{DownloadRequest, Resolver};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbosity_level())?;
    debug!("Starting ttget with args: {:?}", args);

    let formatter = OutputFormatter::new(args.verbosity_level());

    match args.command {
        Command::Serve(serve) => {
            handle_serve(serve).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve(resolve) => handle_resolve(resolve, &formatter).await,
    }
}

/// Run the HTTP API
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.providers.resolver_config();
    let resolver = Resolver::from_config(&config).context("invalid provider configuration")?;

    info!(
        "Provider timeout {:?}, user agent {:?}",
        config.http.timeout, config.http.user_agent
    );

    ttget::server::run(args.addr, resolver)
        .await
        .with_context(|| format!("server on {} failed", args.addr))
}

/// Resolve a single link
async fn handle_resolve(args: ResolveArgs, formatter: &OutputFormatter) -> anyhow::Result<ExitCode> {
    let request = match DownloadRequest::new(args.url.as_str(), args.quality, args.media_type) {
        Ok(request) => request,
        Err(e) => {
            formatter.error(&e.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };

    let resolver = Resolver::from_config(&args.providers.resolver_config())
        .context("invalid provider configuration")?;

    formatter.info(&format!(
        "Trying {} for {}",
        resolver.provider_names().join(", "),
        request.url
    ));

    let start_time = Instant::now();
    match resolver.resolve_request(&request).await {
        Ok(result) => {
            formatter.print_result(&result, start_time.elapsed());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            formatter.error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize logging system
fn init_logging(verbosity: VerbosityLevel) -> anyhow::Result<()> {
    // RUST_LOG wins over the verbosity flags
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.default_log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .compact(),
        )
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
