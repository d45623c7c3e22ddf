use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::inference::normalize;
use crate::models::TextInput;
use crate::state::SharedState;

pub async fn sentiment(
    State(state): State<SharedState>,
    Json(input): Json<TextInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Silent, lossy cut to the model's input limit.
    let text = normalize::truncate(&input.text, normalize::MAX_INPUT_CHARS);

    let candidates = state.inference.sentiment(text).await?;
    let top = normalize::top_candidate(&candidates)
        .ok_or_else(|| AppError::Upstream("No sentiment data returned from API".to_string()))?;

    let body = json!({ "sentiment": &top.label, "score": top.score });
    db::request_log::log_request(&state.pool, "sentiment", text, &body).await;

    Ok(Json(body))
}
