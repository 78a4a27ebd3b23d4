use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: Url,
    pub api_timeout: Duration,

    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_level: Level,

    /// When set, an in-memory employees API is started here and used instead of `api_base_url`.
    pub stub_server_addr: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_base_url = var("API_BASE_URL", "http://127.0.0.1:8080/");
        let api_timeout_secs = var("API_TIMEOUT_SECS", "10");
        let log_level = var("LOG_LEVEL", "debug");

        Ok(Self {
            api_base_url: Url::parse(&api_base_url)
                .with_context(|| format!("API_BASE_URL `{api_base_url}` is not a valid URL"))?,
            api_timeout: Duration::from_secs(
                api_timeout_secs
                    .parse::<u64>()
                    .with_context(|| format!("API_TIMEOUT_SECS `{api_timeout_secs}` is not a number of seconds"))?,
            ),

            log_dir: var("LOG_DIR", "logs"),
            log_file: var("LOG_FILE", "panel.log"),
            log_level: log_level
                .parse::<Level>()
                .ok()
                .with_context(|| format!("LOG_LEVEL `{log_level}` is not a tracing level"))?,

            stub_server_addr: lookup("STUB_SERVER_ADDR").filter(|addr| !addr.trim().is_empty()),
        })
    }
}
