use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::extract::Json;
use axum::http::{Request, Response, StatusCode};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use storyteller_api::config::ServerConfig;
use storyteller_api::router::build_app_router;
use storyteller_api::state::AppState;

/// Build a test `ServerConfig` pointed at the given provider URL.
///
/// `api_key` is `None` to exercise the unconfigured-credential path.
pub fn test_config(hf_api_url: &str, api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        // Tests run from the crate directory; the assets live at the
        // workspace root.
        static_dir: "../../public".to_string(),
        hf_api_url: hf_api_url.to_string(),
        hf_api_key: api_key.map(str::to_string),
        hf_model_id: "test-model".to_string(),
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, static fallback) that production uses.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState::from_config(config.clone());
    build_app_router(state, &config)
}

/// A mock chat-completion provider running on an ephemeral local port.
///
/// Records how many requests it served and the last JSON body it
/// received, so tests can assert both on the outbound prompt and on the
/// no-outbound-call guarantees.
pub struct MockProvider {
    /// Full endpoint URL to put into `ServerConfig::hf_api_url`.
    pub url: String,
    /// Number of requests served.
    pub hits: Arc<AtomicUsize>,
    /// Body of the most recent request.
    pub last_body: Arc<Mutex<Option<serde_json::Value>>>,
}

impl MockProvider {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn last_request_body(&self) -> Option<serde_json::Value> {
        self.last_body.lock().await.clone()
    }
}

/// Spawn a mock provider that answers every request with the given
/// status and JSON payload.
pub async fn spawn_mock_provider(status: StatusCode, payload: serde_json::Value) -> MockProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_body: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));

    let handler_hits = Arc::clone(&hits);
    let handler_last = Arc::clone(&last_body);
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |Json(body): Json<serde_json::Value>| {
            let hits = Arc::clone(&handler_hits);
            let last = Arc::clone(&handler_last);
            let payload = payload.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last.lock().await = Some(body);
                (status, Json(payload))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().expect("Mock provider has no address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock provider server error");
    });

    MockProvider {
        url: format!("http://{addr}/v1/chat/completions"),
        hits,
        last_body,
    }
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    app.oneshot(request).await.expect("Request failed")
}

/// Send a JSON POST request to the app and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    app.oneshot(request).await.expect("Request failed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
