use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_base: String,
    pub api_key: String,
    pub summarize_model: String,
    pub sentiment_model: String,
    pub host: IpAddr,
    pub port: u16,
    pub frontend_origin: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("INFERGATE_DATABASE", "sqlite://infergate.db");

        let api_base = env_or("INFERGATE_API_BASE", "https://api-inference.huggingface.co");
        // Empty key still works for public models, at a reduced rate limit.
        let api_key = env_or("HF_API_KEY", "");

        let summarize_model = env_or("INFERGATE_SUMMARIZE_MODEL", "facebook/bart-large-cnn");
        let sentiment_model = env_or(
            "INFERGATE_SENTIMENT_MODEL",
            "distilbert-base-uncased-finetuned-sst-2-english",
        );

        let host: IpAddr = env_or("INFERGATE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INFERGATE_HOST: {e}"))?;

        let port: u16 = env_or("INFERGATE_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid INFERGATE_PORT: {e}"))?;

        let frontend_origin = env_or("INFERGATE_FRONTEND_ORIGIN", "http://localhost:3000");

        let log_level = env_or("INFERGATE_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            api_base,
            api_key,
            summarize_model,
            sentiment_model,
            host,
            port,
            frontend_origin,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
