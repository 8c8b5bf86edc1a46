use async_trait::async_trait;
use linkbot_core::{Handler, HandlerResponse, Reply, Result, Update};
use tracing::debug;

pub const WELCOME_TEXT: &str = "Welcome to the bot! You can use /links to see available links.";

/// `/start`: plain welcome message, no links.
pub struct StartHandler {
    text: String,
}

impl StartHandler {
    pub fn new() -> Self {
        Self::with_text(WELCOME_TEXT)
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for StartHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        debug!(chat_id = update.chat_id, "Building welcome reply");
        Ok(HandlerResponse::Reply(Reply::text(update.chat_id, self.text.clone())))
    }
}
