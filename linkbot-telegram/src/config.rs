//! Transport config: token, API URL, bot username, log file, webhook and polling settings.
//! Loaded from environment variables; see [`TelegramConfig::from_env`].

use linkbot_core::{BotError, Result};
use std::env;

pub const DEFAULT_POLL_TIMEOUT_SECS: u32 = 10;
const DEFAULT_PORT: &str = "3000";

/// Webhook server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Public URL registered with `setWebhook` at startup, if set.
    pub public_url: Option<String>,
    /// Expected `X-Telegram-Bot-Api-Secret-Token` header value, if set.
    pub secret: Option<String>,
}

/// Telegram transport config. The token is optional here so the webhook server can start
/// and answer with a server error; [`TelegramConfig::token`] enforces it.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub telegram_api_url: Option<String>,
    pub bot_username: Option<String>,
    pub log_file: Option<String>,
    pub webhook: WebhookConfig,
    pub poll_timeout_secs: u32,
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TelegramConfig {
    /// Loads from env: TELEGRAM_BOT_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL), BOT_USERNAME,
    /// LOG_FILE, WEBHOOK_ADDR (or 0.0.0.0:$PORT), WEBHOOK_URL, WEBHOOK_SECRET, POLL_TIMEOUT_SECS.
    /// Empty values count as unset.
    pub fn from_env() -> Result<Self> {
        let bot_token = non_empty("TELEGRAM_BOT_TOKEN").or_else(|| non_empty("BOT_TOKEN"));
        let telegram_api_url =
            non_empty("TELEGRAM_API_URL").or_else(|| non_empty("TELOXIDE_API_URL"));
        let bot_username = non_empty("BOT_USERNAME").map(|u| u.trim_start_matches('@').to_string());
        let log_file = non_empty("LOG_FILE");

        let bind_addr = non_empty("WEBHOOK_ADDR").unwrap_or_else(|| {
            let port = non_empty("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
            format!("0.0.0.0:{}", port)
        });
        let webhook = WebhookConfig {
            bind_addr,
            public_url: non_empty("WEBHOOK_URL"),
            secret: non_empty("WEBHOOK_SECRET"),
        };

        let poll_timeout_secs = match non_empty("POLL_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                BotError::Config(format!("POLL_TIMEOUT_SECS must be a non-negative integer, got {:?}", raw))
            })?,
            None => DEFAULT_POLL_TIMEOUT_SECS,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            bot_username,
            log_file,
            webhook,
            poll_timeout_secs,
        })
    }

    /// Builds a config with the given token and defaults for everything else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token: Some(bot_token),
            telegram_api_url: None,
            bot_username: None,
            log_file: None,
            webhook: WebhookConfig {
                bind_addr: format!("0.0.0.0:{}", DEFAULT_PORT),
                public_url: None,
                secret: None,
            },
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
        }
    }

    /// The bot token, or a config error when it is missing.
    pub fn token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or_else(|| BotError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))
    }
}
