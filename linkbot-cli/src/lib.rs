//! # linkbot-cli
//!
//! CLI foundation: argument parsing, run-mode selection and wiring of config, router and transport.

pub mod app;
pub mod cli;

pub use app::{command_menu, run, webhook_state};
pub use cli::{resolve_mode, Cli, RunMode};
pub use linkbot_telegram::TelegramConfig;
