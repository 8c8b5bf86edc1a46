//! # linkbot-telegram
//!
//! Telegram transport layer: adapters from teloxide types, the [`linkbot_core::Bot`] implementation,
//! env config, the long-polling runner and the webhook HTTP server.
//! Both transports feed the same [`command_router::UpdateDispatcher`].

mod adapters;
mod bot_adapter;
mod config;
mod runner;
mod webhook;

pub use adapters::{TelegramMessageWrapper, TelegramUpdateWrapper};
pub use bot_adapter::{inline_keyboard, request_timeout, TelegramBotAdapter};
pub use config::{TelegramConfig, WebhookConfig, DEFAULT_POLL_TIMEOUT_SECS};
pub use runner::{run_polling, Poller};
pub use webhook::{serve_webhook, webhook_router, WebhookState, SECRET_TOKEN_HEADER};
