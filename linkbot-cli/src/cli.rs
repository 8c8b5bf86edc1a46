//! CLI parser and run-mode selection.

use clap::{Parser, ValueEnum};

/// How the bot receives updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Serve the webhook HTTP endpoint (serverless / hosted deployments).
    Webhook,
    /// Long-poll getUpdates (local / interactive use).
    Polling,
}

#[derive(Parser, Debug)]
#[command(name = "linkbot")]
#[command(about = "Telegram bot answering /start and /links", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Override the run mode; by default webhook on a serverless platform (VERCEL set), polling otherwise.
    #[arg(long, env = "BOT_MODE", value_enum)]
    pub mode: Option<RunMode>,
}

/// Explicit mode wins; otherwise webhook when `VERCEL` is set, polling when not.
pub fn resolve_mode(explicit: Option<RunMode>) -> RunMode {
    explicit.unwrap_or_else(|| {
        if std::env::var_os("VERCEL").is_some() {
            RunMode::Webhook
        } else {
            RunMode::Polling
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_resolve_mode_explicit_wins() {
        env::set_var("VERCEL", "1");
        assert_eq!(resolve_mode(Some(RunMode::Polling)), RunMode::Polling);
        env::remove_var("VERCEL");
        assert_eq!(resolve_mode(Some(RunMode::Webhook)), RunMode::Webhook);
    }

    #[test]
    #[serial]
    fn test_resolve_mode_from_platform() {
        env::remove_var("VERCEL");
        assert_eq!(resolve_mode(None), RunMode::Polling);
        env::set_var("VERCEL", "1");
        assert_eq!(resolve_mode(None), RunMode::Webhook);
        env::remove_var("VERCEL");
    }

    #[test]
    #[serial]
    fn test_parse_without_flags() {
        env::remove_var("BOT_MODE");
        let cli = Cli::try_parse_from(["linkbot"]).unwrap();
        assert!(cli.mode.is_none());
    }

    #[test]
    #[serial]
    fn test_parse_mode() {
        env::remove_var("BOT_MODE");
        let cli = Cli::try_parse_from(["linkbot", "--mode", "webhook"]).unwrap();
        assert_eq!(cli.mode, Some(RunMode::Webhook));
        assert!(Cli::try_parse_from(["linkbot", "--mode", "sideways"]).is_err());

        env::set_var("BOT_MODE", "polling");
        let cli = Cli::try_parse_from(["linkbot"]).unwrap();
        assert_eq!(cli.mode, Some(RunMode::Polling));
        env::remove_var("BOT_MODE");
    }
}
