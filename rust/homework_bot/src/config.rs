use serde::Serialize;
use std::{env, time::Duration};

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// The three secrets. Never serialized, never logged.
#[derive(Clone, Default)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token_set", &!self.practicum_token.is_empty())
            .field("telegram_token_set", &!self.telegram_token.is_empty())
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub endpoint: String,
    pub retry_period_secs: u64,
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_period_secs: DEFAULT_RETRY_PERIOD_SECS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BotConfig {
    pub credentials: Credentials,
    pub settings: Settings,
}

impl BotConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first if a `.env` file should count.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = BotConfig::default();

        cfg.credentials.practicum_token = lookup(PRACTICUM_TOKEN).unwrap_or_default();
        cfg.credentials.telegram_token = lookup(TELEGRAM_TOKEN).unwrap_or_default();
        cfg.credentials.telegram_chat_id = lookup(TELEGRAM_CHAT_ID).unwrap_or_default();

        if let Some(v) = lookup("HOMEWORK_ENDPOINT") {
            if !v.is_empty() {
                cfg.settings.endpoint = v;
            }
        }
        cfg.settings.retry_period_secs = lookup("HOMEWORK_RETRY_PERIOD_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RETRY_PERIOD_SECS);
        cfg.settings.http_timeout_secs = lookup("HOMEWORK_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        cfg
    }
}

/// Fails if any of the three credentials is missing or blank.
pub fn check_tokens(credentials: &Credentials) -> Result<(), ConfigError> {
    let missing: Vec<&'static str> = [
        (PRACTICUM_TOKEN, &credentials.practicum_token),
        (TELEGRAM_TOKEN, &credentials.telegram_token),
        (TELEGRAM_CHAT_ID, &credentials.telegram_chat_id),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingTokens(missing))
    }
}
