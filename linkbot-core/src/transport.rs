//! Webhook payload normalization: JSON mapping or JSON-encoded string → [`Update`].
//!
//! The wire structs follow the Telegram Update schema but only require what dispatch needs
//! (`message.chat.id`), so hand-written payloads like `{"message": {"chat": {"id": 42}, "text": "/links"}}` work.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{BotError, Result};
use crate::types::Update;

#[derive(Debug, Deserialize)]
struct WireUpdate {
    #[serde(default)]
    update_id: Option<i64>,
    #[serde(default)]
    message: Option<WireMessage>,
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    chat: WireChat,
    #[serde(default)]
    from: Option<WireUser>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireChat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: i64,
}

/// Normalizes a payload into a mapping: objects are used as-is, strings are decoded as JSON text.
pub fn normalize_payload(payload: Value) -> Result<Map<String, Value>> {
    match payload {
        Value::Object(map) => Ok(map),
        Value::String(raw) => {
            debug!(len = raw.len(), "Decoding JSON-encoded string payload");
            let decoded: Value =
                serde_json::from_str(&raw).map_err(|e| BotError::Decode(e.to_string()))?;
            match decoded {
                Value::Object(map) => Ok(map),
                other => Err(BotError::Format(format!(
                    "decoded payload is {}, expected an object",
                    kind_of(&other)
                ))),
            }
        }
        other => Err(BotError::Format(format!(
            "payload is {}, expected an object or a JSON string",
            kind_of(&other)
        ))),
    }
}

/// Builds an [`Update`] from a payload. Ok(None) means a well-formed update with no message to dispatch.
pub fn parse_update(payload: Value) -> Result<Option<Update>> {
    let map = normalize_payload(payload)?;
    let wire: WireUpdate = serde_json::from_value(Value::Object(map))
        .map_err(|e| BotError::Format(e.to_string()))?;
    let Some(message) = wire.message else {
        debug!(update_id = ?wire.update_id, "Update has no message");
        return Ok(None);
    };
    let mut update = Update::new(message.chat.id, message.text.unwrap_or_default());
    update.update_id = wire.update_id;
    update.user_id = message.from.map(|u| u.id);
    Ok(Some(update))
}

/// Parses a raw HTTP body. Bodies that are not JSON at all are a decode error.
pub fn parse_body(body: &[u8]) -> Result<Option<Update>> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| BotError::Decode(e.to_string()))?;
    parse_update(payload)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_payload() {
        let update = parse_update(json!({"message": {"chat": {"id": 42}, "text": "/links"}}))
            .unwrap()
            .unwrap();
        assert_eq!(update.chat_id, 42);
        assert_eq!(update.command_name(), Some("links"));
        assert_eq!(update.text, "/links");
        assert!(update.update_id.is_none());
    }

    #[test]
    fn test_string_payload_equals_structured() {
        let raw = r#"{"update_id": 10, "message": {"chat": {"id": 7}, "from": {"id": 3}, "text": "/start"}}"#;
        let from_string = parse_update(Value::String(raw.to_string())).unwrap().unwrap();
        let from_map = parse_update(serde_json::from_str(raw).unwrap()).unwrap().unwrap();
        assert_eq!(from_string.chat_id, from_map.chat_id);
        assert_eq!(from_string.text, from_map.text);
        assert_eq!(from_string.command, from_map.command);
        assert_eq!(from_string.update_id, Some(10));
        assert_eq!(from_string.user_id, Some(3));
    }

    #[test]
    fn test_invalid_json_string_is_decode_error() {
        let err = parse_update(Value::String("not valid json".to_string())).unwrap_err();
        assert!(matches!(err, BotError::Decode(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_other_shapes_are_format_errors() {
        for payload in [json!(42), json!([1, 2]), json!(null), json!(true)] {
            let err = parse_update(payload).unwrap_err();
            assert!(matches!(err, BotError::Format(_)));
        }
        let err = parse_update(Value::String("[1, 2]".to_string())).unwrap_err();
        assert!(matches!(err, BotError::Format(_)));
    }

    #[test]
    fn test_message_with_bad_chat_is_format_error() {
        let err = parse_update(json!({"message": {"chat": {"id": "abc"}, "text": "/start"}}))
            .unwrap_err();
        assert!(matches!(err, BotError::Format(_)));
    }

    #[test]
    fn test_update_without_message_is_nothing_to_dispatch() {
        let update = parse_update(json!({"update_id": 1, "edited_message": {"chat": {"id": 1}}}))
            .unwrap();
        assert!(update.is_none());
    }

    #[test]
    fn test_message_without_text() {
        let update = parse_update(json!({"message": {"chat": {"id": 5}}})).unwrap().unwrap();
        assert_eq!(update.text, "");
        assert!(update.command.is_none());
    }

    #[test]
    fn test_parse_body() {
        assert!(matches!(
            parse_body(b"not valid json").unwrap_err(),
            BotError::Decode(_)
        ));
        assert!(matches!(parse_body(b"").unwrap_err(), BotError::Decode(_)));
        let update = parse_body(br#"{"message": {"chat": {"id": 42}, "text": "/links"}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(update.chat_id, 42);
    }
}
