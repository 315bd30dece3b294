use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::core::{respond, validate_bytes, DownloadResponse, Locale, MediaType};
use crate::error::TtError;
use crate::utils::extract_video_id;

use super::state::AppState;

/// `POST /api/download`
pub async fn download(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<DownloadResponse>) {
    let locale = Locale::from_accept_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let request = match validate_bytes(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(target: "api", error = %e, "rejected download request");
            return reply(respond(Err(e.into()), MediaType::default(), locale));
        }
    };

    let video_id = extract_video_id(&request.url).unwrap_or_else(|| "-".to_string());
    info!(
        target: "api",
        video_id = %video_id,
        quality = %request.quality,
        media_type = %request.media_type,
        "download request"
    );

    // Runs on its own task: a client disconnect does not abort the chain, and
    // a panicking provider surfaces as an internal error instead of a dropped
    // connection.
    let resolver = state.resolver.clone();
    let job = request.clone();
    let outcome = match tokio::spawn(async move { resolver.resolve_request(&job).await }).await {
        Ok(resolved) => resolved.map_err(TtError::from),
        Err(e) => Err(TtError::Internal(format!("resolver task failed: {e}"))),
    };

    reply(respond(outcome, request.media_type, locale))
}

/// `GET /api/status`
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "providers": state.resolver.provider_names(),
    }))
}

fn reply((status, body): (u16, DownloadResponse)) -> (StatusCode, Json<DownloadResponse>) {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body))
}
