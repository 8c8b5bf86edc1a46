use linkbot_core::{parse_body, parse_update, Bot, Result, Update};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::router::{CommandRouter, DispatchOutcome};

/// Transport adapter → command router → reply sender, for one update at a time.
/// Holds the single bot API handle; safe to share across requests behind an `Arc`.
#[derive(Clone)]
pub struct UpdateDispatcher {
    router: CommandRouter,
    bot: Arc<dyn Bot>,
}

impl UpdateDispatcher {
    pub fn new(router: CommandRouter, bot: Arc<dyn Bot>) -> Self {
        Self { router, bot }
    }

    /// Dispatches an already-canonical update. Never fails; see [`DispatchOutcome`].
    pub async fn dispatch_update(&self, update: &Update) -> DispatchOutcome {
        info!(
            chat_id = update.chat_id,
            update_id = ?update.update_id,
            command = ?update.command_name(),
            "step: dispatch started"
        );
        let outcome = self.router.dispatch(update, self.bot.as_ref()).await;
        info!(chat_id = update.chat_id, outcome = ?outcome, "step: dispatch finished");
        outcome
    }

    /// Normalizes a JSON payload (mapping or JSON string) and dispatches it.
    /// Errors only for malformed payloads (`Format` / `Decode`); nothing is sent then.
    #[instrument(skip(self, payload))]
    pub async fn dispatch_payload(&self, payload: Value) -> Result<DispatchOutcome> {
        match parse_update(payload)? {
            Some(update) => Ok(self.dispatch_update(&update).await),
            None => {
                info!("step: update carries no message, ignored");
                Ok(DispatchOutcome::Ignored)
            }
        }
    }

    /// Same as [`Self::dispatch_payload`] for a raw HTTP body.
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn dispatch_body(&self, body: &[u8]) -> Result<DispatchOutcome> {
        match parse_body(body)? {
            Some(update) => Ok(self.dispatch_update(&update).await),
            None => {
                info!("step: update carries no message, ignored");
                Ok(DispatchOutcome::Ignored)
            }
        }
    }
}
