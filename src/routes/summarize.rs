use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::models::TextInput;
use crate::state::SharedState;

pub async fn summarize(
    State(state): State<SharedState>,
    Json(input): Json<TextInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    let summary = state.inference.summarize(&input.text).await?;

    let body = json!({ "result": summary });
    db::request_log::log_request(&state.pool, "summarize", &input.text, &body).await;

    Ok(Json(body))
}
