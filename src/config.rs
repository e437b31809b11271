// src/config.rs
use std::time::Duration;

use tracing::{debug, info};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
pub const DEFAULT_CONVERSATION_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Process configuration, resolved once before the listener is bound.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub gemini_api_url: String,
    pub conversation_ttl: Duration,
    pub static_dir: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("gemini_api_url", &self.gemini_api_url)
            .field("conversation_ttl", &self.conversation_ttl)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    ///
    /// | Variable                | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `API_KEY`               | required                    |
    /// | `PORT`                  | `3000`                      |
    /// | `GEMINI_API_URL`        | gemini-2.0-flash endpoint   |
    /// | `CONVERSATION_TTL_SECS` | `86400`                     |
    /// | `STATIC_DIR`            | `public`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match get("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let ttl_secs = match get("CONVERSATION_TTL_SECS") {
            Some(raw) => match parse_var("CONVERSATION_TTL_SECS", &raw)? {
                // A zero TTL would make every message a new conversation.
                0 => {
                    return Err(ConfigError::Invalid {
                        var: "CONVERSATION_TTL_SECS",
                        value: raw,
                    });
                }
                secs => secs,
            },
            None => DEFAULT_CONVERSATION_TTL_SECS,
        };

        let config = Self {
            port,
            api_key,
            gemini_api_url: get("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            conversation_ttl: Duration::from_secs(ttl_secs),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        };

        info!("Configuration loaded successfully");
        debug!("API key length: {} characters", config.api_key.len());
        debug!(?config);

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
