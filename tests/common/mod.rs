use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use infergate::config::Config;

pub const SUMMARIZE_MODEL: &str = "test/summarize-model";
pub const SENTIMENT_MODEL: &str = "test/sentiment-model";

/// Stand-in for the hosted inference API. Records every request body and
/// serves per-model canned responses.
#[derive(Clone, Default)]
pub struct StubUpstream {
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    responses: Arc<Mutex<HashMap<String, (u16, Value)>>>,
}

impl StubUpstream {
    pub fn set_response(&self, model: &str, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(model.to_string(), (status, body));
    }

    /// Most recent body received for `model`, if any.
    pub fn last_request(&self, model: &str) -> Option<Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(m, _)| m == model)
            .map(|(_, body)| body.clone())
    }

    pub fn request_count(&self, model: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == model)
            .count()
    }
}

async fn stub_model(
    State(stub): State<StubUpstream>,
    Path(model): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    stub.requests.lock().unwrap().push((model.clone(), body));

    let configured = stub.responses.lock().unwrap().get(&model).cloned();
    match configured {
        Some((status, body)) => (StatusCode::from_u16(status).unwrap(), Json(body)),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "model not found" })),
        ),
    }
}

async fn spawn_stub(stub: StubUpstream) -> SocketAddr {
    let app = Router::new()
        .route("/models/{*model}", post(stub_model))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    addr
}

/// A running gateway instance wired to an in-memory store and a stub
/// upstream.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub upstream: StubUpstream,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST `{"text": ...}` to an inference endpoint, return (body, status).
    pub async fn post_text(&self, path: &str, text: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&json!({ "text": text }))
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a JSON endpoint, return (body, status).
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn the gateway on a random port with a fresh in-memory database and a
/// stub upstream pre-loaded with happy-path responses.
pub async fn spawn_app() -> TestApp {
    let upstream = StubUpstream::default();
    upstream.set_response(
        SUMMARIZE_MODEL,
        200,
        json!([{ "summary_text": "A short summary." }]),
    );
    upstream.set_response(
        SENTIMENT_MODEL,
        200,
        json!([[
            { "label": "POSITIVE", "score": 0.95 },
            { "label": "NEGATIVE", "score": 0.05 }
        ]]),
    );
    let upstream_addr = spawn_stub(upstream.clone()).await;

    // One connection only: every connection to sqlite::memory: opens its own
    // database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    infergate::db::init(&pool).await.expect("schema init failed");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        api_base: format!("http://{upstream_addr}"),
        api_key: String::new(),
        summarize_model: SUMMARIZE_MODEL.to_string(),
        sentiment_model: SENTIMENT_MODEL.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        frontend_origin: "http://localhost:3000".to_string(),
        log_level: "warn".to_string(),
    };

    let app = infergate::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        upstream,
    }
}
