//! Long-polling runner: fetches batches with getUpdates and dispatches each update sequentially.
//! Calls deleteWebhook, getMe and setMyCommands once before the loop.

use anyhow::{Context, Result};
use command_router::{CommandRouter, UpdateDispatcher};
use linkbot_core::ToCoreUpdate;
use std::sync::Arc;
use std::time::Duration;
use teloxide::payloads::GetUpdatesSetters;
use teloxide::prelude::*;
use teloxide::types::AllowedUpdate;
use tracing::{debug, error, info, instrument, warn};

use crate::adapters::TelegramUpdateWrapper;
use crate::bot_adapter::{username_or_none, TelegramBotAdapter};

/// Pause after a failed getUpdates call before polling again.
const POLL_ERROR_DELAY: Duration = Duration::from_secs(1);

/// Polling state: the API handle, the dispatcher, the long-poll wait and the next offset.
pub struct Poller {
    bot: Arc<TelegramBotAdapter>,
    dispatcher: Arc<UpdateDispatcher>,
    timeout_secs: u32,
    offset: Option<i32>,
}

impl Poller {
    pub fn new(bot: Arc<TelegramBotAdapter>, dispatcher: Arc<UpdateDispatcher>, timeout_secs: u32) -> Self {
        Self {
            bot,
            dispatcher,
            timeout_secs,
            offset: None,
        }
    }

    /// Offset to pass to the next getUpdates call (last seen update id + 1).
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// Fetches one batch and dispatches each update in order, awaiting each before the next.
    /// Returns the number of updates received.
    pub async fn poll_once(&mut self) -> Result<usize> {
        let mut request = self
            .bot
            .inner()
            .get_updates()
            .timeout(self.timeout_secs)
            .allowed_updates(vec![AllowedUpdate::Message]);
        if let Some(offset) = self.offset {
            request = request.offset(offset);
        }
        let updates = request.await.context("getUpdates failed")?;

        let received = updates.len();
        for update in &updates {
            self.offset = Some(update.id.as_offset());
            match TelegramUpdateWrapper(update).to_core() {
                Some(core_update) => {
                    debug!(
                        update_id = ?core_update.update_id,
                        chat_id = core_update.chat_id,
                        message_content = %core_update.text,
                        "Received message"
                    );
                    self.dispatcher.dispatch_update(&core_update).await;
                }
                None => info!(update_id = update.id.0, "Skipping non-message update"),
            }
        }
        Ok(received)
    }

    /// Polls until the process is terminated. getUpdates errors are logged and retried after a short delay.
    pub async fn run(mut self) {
        info!(timeout_secs = self.timeout_secs, "Polling loop started");
        loop {
            if let Err(e) = self.poll_once().await {
                error!(error = %format!("{:#}", e), "Polling failed");
                tokio::time::sleep(POLL_ERROR_DELAY).await;
            }
        }
    }
}

/// Prepares the bot for polling and runs the loop: deleteWebhook, getMe (for @mention filtering),
/// setMyCommands with `commands`, then [`Poller::run`]. The router is built by `make_router` from the fetched username.
#[instrument(skip(bot, commands, make_router))]
pub async fn run_polling<F>(
    bot: Arc<TelegramBotAdapter>,
    timeout_secs: u32,
    commands: &[(&str, &str)],
    make_router: F,
) -> Result<()>
where
    F: FnOnce(Option<String>) -> CommandRouter,
{
    bot.delete_webhook()
        .await
        .context("deleteWebhook failed; check TELEGRAM_BOT_TOKEN")?;

    let username = username_or_none(&bot).await;

    if let Err(e) = bot.register_commands(commands).await {
        warn!(error = %e, "setMyCommands failed; command menu not updated");
    }

    let router = make_router(username);
    info!(commands = ?router.commands(), "Bot started successfully");

    let dispatcher = Arc::new(UpdateDispatcher::new(router, bot.clone()));
    Poller::new(bot, dispatcher, timeout_secs).run().await;

    Ok(())
}
