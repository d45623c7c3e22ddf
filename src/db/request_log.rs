use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::RequestLog;

pub async fn append(
    pool: &SqlitePool,
    endpoint: &str,
    input_text: &str,
    result: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO requests (endpoint, input_text, result, timestamp)
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(endpoint)
    .bind(input_text)
    .bind(result)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<RequestLog>, sqlx::Error> {
    sqlx::query_as::<_, RequestLog>(
        "SELECT id, endpoint, input_text, result, timestamp FROM requests
         ORDER BY id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Record a completed request. This is called explicitly in handlers after a
/// successful upstream call; a write failure never reaches the client.
pub async fn log_request(
    pool: &SqlitePool,
    endpoint: &str,
    input_text: &str,
    result: &serde_json::Value,
) {
    if let Err(e) = append(pool, endpoint, input_text, &result.to_string()).await {
        tracing::error!("Failed to log {endpoint} request: {e}");
    }
}
