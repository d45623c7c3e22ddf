pub mod history;
pub mod methods;
pub mod sentiment;
pub mod summarize;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/summarize", post(summarize::summarize))
        .route("/api/sentiment", post(sentiment::sentiment))
        .route("/api/methods", get(methods::list_methods))
        .route("/api/history", get(history::history))
}
