//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error for linkbot (config, inbound payload, outbound send, handler).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(String),

    /// Inbound payload has the wrong shape (not a mapping, or a message that breaks the Update schema).
    #[error("Format error: {0}")]
    Format(String),

    /// Inbound payload is not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Outbound message could not be delivered (transport failure or API rejection).
    #[error("Send error: {0}")]
    Send(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

impl BotError {
    /// True for errors caused by the caller's payload (reported as a client error).
    pub fn is_client_error(&self) -> bool {
        matches!(self, BotError::Format(_) | BotError::Decode(_))
    }
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A links reply was requested but no links are configured.
    #[error("No links configured")]
    NoLinks,
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
