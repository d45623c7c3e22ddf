pub mod normalize;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::Config;

/// A single ranked classification result as returned by the upstream model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub score: f64,
}

#[derive(Debug)]
pub enum InferenceError {
    Transport(String),
    Shape(String),
    PayloadTooLarge,
}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceError::Transport(msg) => write!(f, "transport failure: {msg}"),
            InferenceError::Shape(msg) => write!(f, "unexpected response shape: {msg}"),
            InferenceError::PayloadTooLarge => write!(f, "payload too large"),
        }
    }
}

/// Client for the hosted inference API. One outbound call per gateway
/// request; no retries.
pub struct InferenceClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    summarize_model: String,
    sentiment_model: String,
}

impl InferenceClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            summarize_model: config.summarize_model.clone(),
            sentiment_model: config.sentiment_model.clone(),
        }
    }

    async fn call_model(
        &self,
        model: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, InferenceError> {
        let url = format!("{}/models/{}", self.api_base, model);

        let mut req = self.client.post(&url).json(payload);
        if !self.api_key.is_empty() {
            req = req.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::PAYLOAD_TOO_LARGE {
            return Err(InferenceError::PayloadTooLarge);
        }
        if !status.is_success() {
            return Err(InferenceError::Transport(format!(
                "upstream returned {status}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| InferenceError::Shape(e.to_string()))
    }

    /// Summarize `text`. The upstream answers with a one-element array
    /// carrying `summary_text`.
    pub async fn summarize(&self, text: &str) -> Result<String, InferenceError> {
        let payload = json!({ "inputs": text, "parameters": { "max_length": 100 } });
        let value = self.call_model(&self.summarize_model, &payload).await?;

        value
            .get(0)
            .and_then(|v| v.get("summary_text"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| InferenceError::Shape("Invalid response format from API".to_string()))
    }

    /// Classify `text`. The upstream answers with a nested array: the first
    /// element is the ranked candidate list for the first input. Some models
    /// return a bare object instead of a list when there is a single label.
    pub async fn sentiment(&self, text: &str) -> Result<Vec<Candidate>, InferenceError> {
        let payload = json!({ "inputs": text });
        let value = self.call_model(&self.sentiment_model, &payload).await?;

        let first = value
            .get(0)
            .ok_or_else(|| InferenceError::Shape("No sentiment data returned from API".to_string()))?;

        let candidates: Vec<Candidate> = if first.is_array() {
            serde_json::from_value(first.clone())
                .map_err(|e| InferenceError::Shape(e.to_string()))?
        } else {
            vec![
                serde_json::from_value(first.clone())
                    .map_err(|e| InferenceError::Shape(e.to_string()))?,
            ]
        };

        if candidates.is_empty() {
            return Err(InferenceError::Shape(
                "No sentiment data returned from API".to_string(),
            ));
        }

        Ok(candidates)
    }
}
