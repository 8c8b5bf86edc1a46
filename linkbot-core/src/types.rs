//! Core types: update, reply, link, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::{parse_command, ParsedCommand};

/// One inbound event: a message sent by a user to the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    /// Telegram update id; absent for hand-built webhook payloads.
    pub update_id: Option<i64>,
    pub chat_id: i64,
    pub user_id: Option<i64>,
    /// Leading command token of `text`, if the message starts with one.
    pub command: Option<ParsedCommand>,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl Update {
    /// Builds an update from a chat id and message text; the command is parsed from the text.
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            update_id: None,
            chat_id,
            user_id: None,
            command: parse_command(&text),
            text,
            received_at: Utc::now(),
        }
    }

    pub fn with_update_id(mut self, update_id: i64) -> Self {
        self.update_id = Some(update_id);
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Lower-cased command name, if any.
    pub fn command_name(&self) -> Option<&str> {
        self.command.as_ref().map(|c| c.name.as_str())
    }
}

/// A navigation button: label shown to the user and the URL it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One outbound message: destination chat, body text, and ordered link buttons (may be empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub chat_id: i64,
    pub text: String,
    pub links: Vec<Link>,
}

impl Reply {
    /// Plain text reply without links.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            links: Vec::new(),
        }
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

/// Handler result: a reply to send, or nothing to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    Reply(Reply),
    Ignore,
}

/// Converts a transport-specific update type to a core [`Update`]. Returns None when there is no message to dispatch.
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> Option<Update>;
}

/// Command handler: turns an update into a [`HandlerResponse`]. Sending is done by the caller.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, update: &Update) -> crate::error::Result<HandlerResponse>;
}
