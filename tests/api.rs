use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};
use ttget::server::{build_router, AppState};
use ttget::{
    DownloadResponse, DownloadResult, Locale, MediaType, Provider, ProviderError, ProviderKind,
    ProviderSpec, Quality, Resolver, ResolverConfig,
};

const LINK: &str = "https://www.tiktok.com/@user/video/123";

async fn spawn_app(resolver: Resolver) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(AppState::new(resolver));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn post(base: &str, body: Value) -> (u16, DownloadResponse) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/download", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

struct FailingProvider {
    calls: AtomicU32,
}

#[async_trait]
impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn attempt(
        &self,
        _url: &str,
        _quality: Quality,
        _media_type: MediaType,
    ) -> Result<Option<DownloadResult>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Status(503))
    }
}

struct PanickingProvider;

#[async_trait]
impl Provider for PanickingProvider {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn attempt(
        &self,
        _url: &str,
        _quality: Quality,
        _media_type: MediaType,
    ) -> Result<Option<DownloadResult>, ProviderError> {
        panic!("provider bug")
    }
}

#[tokio::test]
async fn audio_request_resolved_by_first_provider() {
    let mut provider = mockito::Server::new_async().await;
    provider
        .mock("POST", "/api/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "music": "https://cdn.example/a.mp3" }"#)
        .create_async()
        .await;

    let config = ResolverConfig::default().with_providers(vec![
        ProviderSpec::new(ProviderKind::Tikwm).with_endpoint(format!("{}/api/", provider.url())),
    ]);
    let base = spawn_app(Resolver::from_config(&config).unwrap()).await;

    let (status, body) = post(&base, json!({ "url": LINK, "type": "audio" })).await;

    assert_eq!(status, 200);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "success": true,
            "audioUrl": "https://cdn.example/a.mp3",
            "quality": "audio",
            "type": "audio"
        })
    );
}

#[tokio::test]
async fn falls_back_to_html_provider() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/tikwm/")
        .with_status(502)
        .create_async()
        .await;
    server
        .mock("POST", "/ttdownloader/")
        .with_status(200)
        .with_body(r#"<a class="btn" href="https://cdn.example/nowm.mp4?x=1&amp;y=2">Download</a>"#)
        .create_async()
        .await;
    let snaptik = server
        .mock("POST", "/snaptik/")
        .expect(0)
        .create_async()
        .await;

    let config = ResolverConfig::default().with_providers(vec![
        ProviderSpec::new(ProviderKind::Tikwm).with_endpoint(format!("{}/tikwm/", server.url())),
        ProviderSpec::new(ProviderKind::TtDownloader)
            .with_endpoint(format!("{}/ttdownloader/", server.url())),
        ProviderSpec::new(ProviderKind::Snaptik).with_endpoint(format!("{}/snaptik/", server.url())),
    ]);
    let base = spawn_app(Resolver::from_config(&config).unwrap()).await;

    let (status, body) = post(&base, json!({ "url": LINK })).await;

    assert_eq!(status, 200);
    assert!(body.success);
    assert_eq!(body.download_url.as_deref(), Some("https://cdn.example/nowm.mp4?x=1&y=2"));
    assert_eq!(body.audio_url, None);
    assert_eq!(body.media_type, Some(MediaType::Video));
    snaptik.assert_async().await;
}

#[tokio::test]
async fn exhausted_chain_is_business_failure() {
    let failing = Arc::new(FailingProvider {
        calls: AtomicU32::new(0),
    });
    let resolver = Resolver::new(vec![
        failing.clone() as Arc<dyn Provider>,
        failing.clone() as Arc<dyn Provider>,
    ]);
    let base = spawn_app(resolver).await;

    let (status, body) = post(&base, json!({ "url": LINK, "quality": "hd" })).await;

    assert_eq!(status, 200);
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some(Locale::Fr.unavailable()));
    assert!(body.download_url.is_none() && body.audio_url.is_none());
    assert_eq!(failing.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalid_link_is_rejected_without_calling_providers() {
    let failing = Arc::new(FailingProvider {
        calls: AtomicU32::new(0),
    });
    let base = spawn_app(Resolver::new(vec![failing.clone() as Arc<dyn Provider>])).await;

    for body in [
        json!({ "url": "not-a-url" }),
        json!({ "url": "https://www.youtube.com/watch?v=xxx" }),
        json!({ "url": LINK, "quality": "8k" }),
        json!({ "url": LINK, "type": "gif" }),
        json!({}),
    ] {
        let (status, response) = post(&base, body.clone()).await;
        assert_eq!(status, 400, "{}", body);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "error": Locale::Fr.invalid_link() })
        );
    }

    assert_eq!(failing.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let base = spawn_app(Resolver::new(Vec::new())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/download", base))
        .header("content-type", "application/json")
        .body("{ url: ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: DownloadResponse = response.json().await.unwrap();
    assert!(!body.success);
}

#[tokio::test]
async fn english_messages_on_request() {
    let base = spawn_app(Resolver::new(Vec::new())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/download", base))
        .header("accept-language", "en-US,en;q=0.9")
        .json(&json!({ "url": "not-a-url" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: DownloadResponse = response.json().await.unwrap();
    assert_eq!(body.error.as_deref(), Some(Locale::En.invalid_link()));
}

#[tokio::test]
async fn provider_panic_is_internal_error() {
    let base = spawn_app(Resolver::new(vec![Arc::new(PanickingProvider) as Arc<dyn Provider>])).await;

    let (status, body) = post(&base, json!({ "url": LINK })).await;

    assert_eq!(status, 500);
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some(Locale::Fr.internal_error()));
}

#[tokio::test]
async fn status_lists_providers() {
    let config = ResolverConfig::default();
    let base = spawn_app(Resolver::from_config(&config).unwrap()).await;

    let status: Value = reqwest::get(format!("{}/api/status", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(status["name"], "ttget");
    assert_eq!(status["providers"], json!(["tikwm", "ttdownloader", "snaptik"]));
}
