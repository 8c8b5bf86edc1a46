//! Command catalog: names and descriptions of the supported commands, and the router wiring them up.

use command_router::CommandRouter;
use std::sync::Arc;

use crate::links::LinksHandler;
use crate::start::StartHandler;

/// Supported commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Links,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Start, Command::Links];

    /// Command name without the leading slash.
    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Links => "links",
        }
    }

    /// Description shown in the Telegram command menu.
    pub fn description(self) -> &'static str {
        match self {
            Command::Start => "Show the welcome message",
            Command::Links => "Show useful links",
        }
    }
}

/// Router with `/start` and `/links` registered. `bot_username` enables `@mention` filtering.
pub fn build_router(bot_username: Option<String>) -> CommandRouter {
    CommandRouter::new()
        .add_command(Command::Start.name(), Arc::new(StartHandler::new()))
        .add_command(Command::Links.name(), Arc::new(LinksHandler::default()))
        .with_bot_username(bot_username)
}
