//! Adapters from Telegram (teloxide) types to linkbot_core types.
//! Depends only on teloxide and linkbot_core type definitions.

use linkbot_core::{ToCoreUpdate, Update};
use teloxide::types::UpdateKind;

/// Wraps a teloxide Message for conversion to a core [`Update`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreUpdate for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Update> {
        let mut update = Update::new(self.0.chat.id.0, self.0.text().unwrap_or(""));
        update.user_id = self.0.from.as_ref().map(|u| u.id.0 as i64);
        Some(update)
    }
}

/// Wraps a teloxide Update; only plain `message` updates are dispatched.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> ToCoreUpdate for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> Option<Update> {
        match &self.0.kind {
            UpdateKind::Message(msg) => TelegramMessageWrapper(msg)
                .to_core()
                .map(|u| u.with_update_id(i64::from(self.0.id.0))),
            _ => None,
        }
    }
}
