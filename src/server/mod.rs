//! HTTP API

mod handlers;
mod router;
mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::core::Resolver;
use crate::error::TtError;

pub use router::build_router;
pub use state::AppState;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Serve the API until Ctrl+C
pub async fn run(bind: SocketAddr, resolver: Resolver) -> Result<(), TtError> {
    let state = AppState::new(resolver);
    let providers = state.resolver.provider_names().join(", ");

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let local = listener.local_addr()?;
    info!(target: "web", "API listening on http://{local}/ (providers: {providers})");

    let app = build_router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!(target: "web", "API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!(target: "web", "Shutdown requested");
}
