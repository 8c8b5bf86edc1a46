//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `linkbot-telegram`,
//! tests substitute a recording fake.

use crate::error::Result;
use crate::types::Reply;
use async_trait::async_trait;

/// Outbound reply sender. Implementations map to a transport (e.g. the Telegram Bot API).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `reply.text` to `reply.chat_id`; links, if any, become an inline keyboard with one button per row.
    async fn send_reply(&self, reply: &Reply) -> Result<()>;
}
