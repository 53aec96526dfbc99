// ulaw-wav/src/config.rs
use anyhow::{bail, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn load_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_format = match lookup("LOG_FORMAT").unwrap_or_else(|| "text".to_string()).to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => bail!("Geçersiz LOG_FORMAT değeri: {}", other),
        };

        Ok(AppConfig {
            env: lookup("ENV").unwrap_or_else(|| "production".to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format,
        })
    }

    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}
