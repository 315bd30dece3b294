use std::time::Instant;

use axum::extract::connect_info::ConnectInfo;
use axum::http::Request;
use axum::middleware::{from_fn, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use super::handlers;
use super::state::AppState;

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/download", post(handlers::download))
        .route("/api/status", get(handlers::status))
        .layer(from_fn(access_log_mw))
        .with_state(state)
}

async fn access_log_mw(req: Request<axum::body::Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let method = req.method().to_string();
    let ip = req
        .extensions()
        .get::<ConnectInfo<std::net::SocketAddr>>()
        .map(|c| c.0.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let started = Instant::now();
    let resp = next.run(req).await;
    info!(
        target: "web_access",
        ip = %ip,
        method = %method,
        path = %path,
        status = %resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}
