use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

pub async fn history(
    State(state): State<SharedState>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = params.limit.unwrap_or(10).max(1).min(100);

    let entries = db::request_log::list_recent(&state.pool, limit).await?;

    Ok(Json(json!({ "history": entries })))
}
