//! Wraps teloxide::Bot and implements [`linkbot_core::Bot`]. Production code sends messages via Telegram;
//! tests can substitute another Bot impl or point the API URL at a mock server.

use std::time::Duration;

use async_trait::async_trait;
use linkbot_core::{Bot as CoreBot, BotError, Link, Reply, Result};
use teloxide::payloads::{SendMessageSetters, SetWebhookSetters};
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ChatId, InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::{debug, info};

use crate::config::TelegramConfig;

/// Slack on top of the long-poll wait so an empty getUpdates answer arrives before the client gives up.
const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 10;

/// HTTP request timeout for a bot whose getUpdates calls wait up to `poll_timeout_secs`.
pub fn request_timeout(poll_timeout_secs: u32) -> Duration {
    Duration::from_secs(u64::from(poll_timeout_secs) + REQUEST_TIMEOUT_MARGIN_SECS)
}

/// Renders links as an inline keyboard: one URL button per row, in order.
pub fn inline_keyboard(links: &[Link]) -> Result<InlineKeyboardMarkup> {
    let rows = links
        .iter()
        .map(|link| {
            let url = reqwest::Url::parse(&link.url)
                .map_err(|e| BotError::Send(format!("Invalid link url {}: {}", link.url, e)))?;
            Ok(vec![InlineKeyboardButton::url(link.label.clone(), url)])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

/// Thin wrapper around teloxide::Bot that implements linkbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the teloxide Bot from config. Fails with a config error when the token is missing or the API URL is invalid.
    /// The HTTP client timeout is derived from `poll_timeout_secs` (see [`request_timeout`]); teloxide's default
    /// client would cut long polls off at 17 seconds.
    pub fn from_config(config: &TelegramConfig) -> Result<Self> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(request_timeout(config.poll_timeout_secs))
            .build()
            .map_err(|e| BotError::Config(format!("Failed to build HTTP client: {}", e)))?;
        let mut bot = teloxide::Bot::with_client(config.token()?, client);
        if let Some(api_url) = &config.telegram_api_url {
            let url = reqwest::Url::parse(api_url)
                .map_err(|e| BotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", api_url, e)))?;
            bot = bot.set_api_url(url);
        }
        Ok(Self::new(bot))
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    /// Username of the bot (`getMe`).
    pub async fn fetch_username(&self) -> Result<Option<String>> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        Ok(me.user.username.clone())
    }

    /// Publishes the command menu (`setMyCommands`) from (name, description) pairs.
    pub async fn register_commands(&self, commands: &[(&str, &str)]) -> Result<()> {
        let commands = commands
            .iter()
            .map(|(name, description)| BotCommand::new(*name, *description))
            .collect::<Vec<_>>();
        self.bot
            .set_my_commands(commands)
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }

    /// Removes the webhook so `getUpdates` can be used.
    pub async fn delete_webhook(&self) -> Result<()> {
        self.bot
            .delete_webhook()
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }

    /// Registers `url` as the webhook, with an optional secret token Telegram echoes in a header.
    pub async fn set_webhook(&self, url: &str, secret: Option<&str>) -> Result<()> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| BotError::Config(format!("Invalid WEBHOOK_URL {}: {}", url, e)))?;
        let mut request = self.bot.set_webhook(url);
        if let Some(secret) = secret {
            request = request.secret_token(secret.to_string());
        }
        request.await.map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, reply: &Reply) -> Result<()> {
        let request = self.bot.send_message(ChatId(reply.chat_id), reply.text.clone());
        let request = if reply.has_links() {
            request.reply_markup(inline_keyboard(&reply.links)?)
        } else {
            request
        };
        request.await.map_err(|e| BotError::Send(e.to_string()))?;
        debug!(chat_id = reply.chat_id, links = reply.links.len(), "sendMessage ok");
        Ok(())
    }
}

impl std::fmt::Debug for TelegramBotAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBotAdapter").finish_non_exhaustive()
    }
}

/// Logs and returns the bot username, or None when `getMe` fails.
pub(crate) async fn username_or_none(bot: &TelegramBotAdapter) -> Option<String> {
    match bot.fetch_username().await {
        Ok(Some(username)) => {
            info!(username = %username, "Bot username set");
            Some(username)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "getMe failed; @mention filtering disabled");
            None
        }
    }
}
