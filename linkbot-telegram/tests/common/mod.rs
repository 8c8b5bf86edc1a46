//! Shared helpers: mock Telegram API responses and a recording Bot.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use linkbot_core::{Bot, BotError, Reply};
use linkbot_telegram::TelegramBotAdapter;

/// Teloxide request path format is `/bot<token>/<Method>` (teloxide capitalizes the method name).
pub const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

pub fn method_path(method: &str) -> String {
    let mut chars = method.chars();
    let method: String = chars.next().map(|c| c.to_ascii_uppercase()).into_iter().chain(chars).collect();
    format!("/bot{}/{}", TEST_BOT_TOKEN, method)
}

/// Adapter whose requests go to the mock server.
pub fn adapter_for(server: &mockito::ServerGuard) -> TelegramBotAdapter {
    let url = reqwest::Url::parse(&server.url()).expect("mock server url");
    TelegramBotAdapter::new(teloxide::Bot::new(TEST_BOT_TOKEN).set_api_url(url))
}

pub const SEND_MESSAGE_OK: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 1,
        "date": 1706529600,
        "chat": {"id": 123, "type": "private"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
        "text": "This is a test response"
    }
}"#;

pub const BLOCKED_BY_USER: &str = r#"{
    "ok": false,
    "error_code": 403,
    "description": "Forbidden: bot was blocked by the user"
}"#;

pub const TRUE_RESULT: &str = r#"{"ok": true, "result": true}"#;

pub const GET_ME_OK: &str = r#"{
    "ok": true,
    "result": {
        "id": 123456789,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "testbot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "has_main_web_app": false
    }
}"#;

/// One `message` update as returned by getUpdates.
pub fn message_update(update_id: i64, chat_id: i64, text: &str) -> serde_json::Value {
    serde_json::json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1706529600,
            "chat": {"id": chat_id, "type": "private", "first_name": "Test"},
            "from": {"id": 5, "is_bot": false, "first_name": "Test"},
            "text": text
        }
    })
}

/// Records every reply instead of sending it.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<Reply>>,
    pub fail: bool,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<Reply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_reply(&self, reply: &Reply) -> linkbot_core::Result<()> {
        if self.fail {
            return Err(BotError::Send("Unauthorized".to_string()));
        }
        self.sent.lock().unwrap().push(reply.clone());
        Ok(())
    }
}
