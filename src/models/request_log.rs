use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed request/response pair. Rows are written once and never
/// updated or deleted.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct RequestLog {
    pub id: i64,
    pub endpoint: String,
    pub input_text: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}
