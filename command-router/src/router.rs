use linkbot_core::{Bot, Handler, HandlerResponse, Update};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Result of dispatching one update. Every variant is a successful dispatch for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler produced a reply and it was sent.
    Replied,
    /// No command, unknown command, command for another bot, or the handler chose not to reply.
    Ignored,
    /// The handler or the reply send failed; already logged.
    HandlerFailed,
}

/// Fixed set of command handlers keyed by lower-cased command name.
#[derive(Clone, Default)]
pub struct CommandRouter {
    routes: Vec<(String, Arc<dyn Handler>)>,
    bot_username: Option<String>,
}

impl CommandRouter {
    /// Creates a router with no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `/command`. A later registration for the same name replaces the earlier one.
    pub fn add_command(mut self, command: &str, handler: Arc<dyn Handler>) -> Self {
        let name = command.trim_start_matches('/').to_ascii_lowercase();
        self.routes.retain(|(existing, _)| *existing != name);
        self.routes.push((name, handler));
        self
    }

    /// Sets the bot's username; commands with an `@mention` of another bot are then ignored.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    /// Registered command names, in registration order.
    pub fn commands(&self) -> Vec<&str> {
        self.routes.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn find(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.routes
            .iter()
            .find(|(route, _)| route == name)
            .map(|(_, handler)| handler)
    }

    /// Runs the handler for the update's command and sends its reply through `bot`.
    #[instrument(skip(self, update, bot), fields(chat_id = update.chat_id, update_id = ?update.update_id))]
    pub async fn dispatch(&self, update: &Update, bot: &dyn Bot) -> DispatchOutcome {
        let Some(command) = update.command.as_ref() else {
            info!(chat_id = update.chat_id, "step: no command, ignored");
            return DispatchOutcome::Ignored;
        };

        if let Some(username) = self.bot_username.as_deref() {
            if !command.is_addressed_to(username) {
                info!(
                    chat_id = update.chat_id,
                    command = %command.name,
                    mention = ?command.mention,
                    "step: command addressed to another bot, ignored"
                );
                return DispatchOutcome::Ignored;
            }
        }

        let Some(handler) = self.find(&command.name) else {
            info!(chat_id = update.chat_id, command = %command.name, "step: unknown command, ignored");
            return DispatchOutcome::Ignored;
        };

        let handler_name = std::any::type_name_of_val(handler.as_ref());
        info!(
            chat_id = update.chat_id,
            command = %command.name,
            handler = %handler_name,
            "step: handler processing"
        );

        let reply = match handler.handle(update).await {
            Ok(HandlerResponse::Reply(reply)) => reply,
            Ok(HandlerResponse::Ignore) => {
                info!(chat_id = update.chat_id, handler = %handler_name, "step: handler ignored update");
                return DispatchOutcome::Ignored;
            }
            Err(e) => {
                error!(error = %e, chat_id = update.chat_id, handler = %handler_name, "Handler failed");
                return DispatchOutcome::HandlerFailed;
            }
        };

        if reply.chat_id != update.chat_id {
            warn!(
                chat_id = update.chat_id,
                reply_chat_id = reply.chat_id,
                "step: reply addressed to a different chat"
            );
        }

        match bot.send_reply(&reply).await {
            Ok(()) => {
                info!(
                    chat_id = reply.chat_id,
                    command = %command.name,
                    links = reply.links.len(),
                    "step: reply sent"
                );
                DispatchOutcome::Replied
            }
            Err(e) => {
                error!(error = %e, chat_id = reply.chat_id, command = %command.name, "Failed to send reply");
                DispatchOutcome::HandlerFailed
            }
        }
    }
}
