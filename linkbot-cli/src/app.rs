//! Wiring: config → bot adapter → router → transport.

use anyhow::{Context, Result};
use command_router::UpdateDispatcher;
use handlers::{build_router, Command};
use linkbot_telegram::{run_polling, serve_webhook, TelegramBotAdapter, TelegramConfig, WebhookState};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::cli::RunMode;

/// (name, description) pairs for setMyCommands.
pub fn command_menu() -> Vec<(&'static str, &'static str)> {
    Command::ALL
        .iter()
        .map(|c| (c.name(), c.description()))
        .collect()
}

/// Builds the webhook state. A missing token leaves the dispatcher empty so requests get a server error.
pub fn webhook_state(config: &TelegramConfig) -> Result<WebhookState> {
    let dispatcher = match TelegramBotAdapter::from_config(config) {
        Ok(bot) => {
            let router = build_router(config.bot_username.clone());
            Some(Arc::new(UpdateDispatcher::new(router, Arc::new(bot))))
        }
        Err(e) if config.bot_token.is_none() => {
            error!(error = %e, "Bot token missing; webhook will answer 500");
            None
        }
        Err(e) => return Err(e).context("Build Telegram bot from config"),
    };
    Ok(WebhookState::new(dispatcher, config.webhook.secret.clone()))
}

/// Runs the bot in `mode` until the process is stopped.
#[instrument(skip(config))]
pub async fn run(config: TelegramConfig, mode: RunMode) -> Result<()> {
    match mode {
        RunMode::Polling => {
            let bot = TelegramBotAdapter::from_config(&config)
                .context("TELEGRAM_BOT_TOKEN not set in environment variables")?;
            info!(poll_timeout_secs = config.poll_timeout_secs, "Starting in polling mode");
            let menu = command_menu();
            run_polling(Arc::new(bot), config.poll_timeout_secs, &menu, build_router).await
        }
        RunMode::Webhook => {
            let state = webhook_state(&config)?;
            if let (Some(url), true) = (config.webhook.public_url.as_deref(), state.is_configured()) {
                let bot = TelegramBotAdapter::from_config(&config)?;
                match bot.set_webhook(url, config.webhook.secret.as_deref()).await {
                    Ok(()) => info!(url = %url, "Webhook registered"),
                    Err(e) => warn!(error = %e, url = %url, "setWebhook failed"),
                }
            }
            info!(bind_addr = %config.webhook.bind_addr, "Bot configured. Starting in webhook mode");
            serve_webhook(&config.webhook.bind_addr, state).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_menu() {
        let menu = command_menu();
        let names: Vec<&str> = menu.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["start", "links"]);
    }

    #[test]
    fn test_webhook_state_without_token() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.bot_token = None;
        let state = webhook_state(&config).unwrap();
        assert!(!state.is_configured());
    }

    #[test]
    fn test_webhook_state_with_token() {
        let config = TelegramConfig::with_token("123:abc".to_string());
        let state = webhook_state(&config).unwrap();
        assert!(state.is_configured());
    }

    /// **Test: Polling without a token fails before any Telegram API call.**
    #[tokio::test]
    async fn test_run_polling_without_token_fails_without_traffic() {
        let mut server = mockito::Server::new_async().await;
        let any_request = server
            .mock("POST", mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"ok": true, "result": true}"#)
            .expect(0)
            .create_async()
            .await;

        let mut config = TelegramConfig::with_token("t".to_string());
        config.bot_token = None;
        config.telegram_api_url = Some(server.url());

        let err = run(config, RunMode::Polling).await.unwrap_err();

        assert!(format!("{:#}", err).contains("TELEGRAM_BOT_TOKEN"));
        any_request.assert_async().await;
    }

    #[test]
    fn test_webhook_state_bad_api_url_is_error() {
        let mut config = TelegramConfig::with_token("123:abc".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(webhook_state(&config).is_err());
    }
}
