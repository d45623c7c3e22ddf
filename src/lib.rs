pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod routes;
pub mod inference;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{Json, Router};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::inference::InferenceClient;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: SqlitePool, config: Config) -> Router {
    let inference = InferenceClient::new(&config);

    // The browser frontend is the only expected cross-origin caller.
    let cors = match config.frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
        Err(e) => {
            tracing::warn!("Invalid frontend origin, CORS disabled: {e}");
            CorsLayer::new()
        }
    };

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        inference,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(health))
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "infergate API" }))
}

async fn health() -> &'static str {
    "ok"
}
