//! linkbot: answer /start and /links over a webhook or by long polling. Config from env (.env supported).

use anyhow::Result;
use clap::Parser;
use linkbot_cli::{resolve_mode, run, Cli, TelegramConfig};
use linkbot_core::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TelegramConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let mode = resolve_mode(cli.mode);
    info!(mode = ?mode, "linkbot starting");

    run(config, mode).await
}
