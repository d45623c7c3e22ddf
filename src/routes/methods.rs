use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::state::SharedState;

pub async fn list_methods(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "methods": [
            {
                "id": "summarize",
                "name": "Text Summarization",
                "description": "Condenses long text into a shorter summary while preserving key information.",
                "model": &state.config.summarize_model,
                "endpoint": "/api/summarize",
            },
            {
                "id": "sentiment",
                "name": "Sentiment Analysis",
                "description": "Analyzes the sentiment, emotional tone of a text (positive/negative) and returns a score.",
                "model": &state.config.sentiment_model,
                "endpoint": "/api/sentiment",
            },
        ]
    }))
}
