//! Decoding of service JSON into typed messages
//!
//! The decoder dispatches on the `role` discriminator string, then on the
//! shape each role requires. It is a pure function over an already-parsed
//! [`serde_json::Value`]; transport and parsing of the raw body belong to
//! the HTTP layer.

use serde_json::{Map, Value};

use crate::codec::error::{DecodeError, DecodeResult};
use crate::codec::tool_calls::decode_tool_calls;
use crate::protocol::{ContentPart, Message, MessageContent, MessageRole};

/// Decode a message from a raw JSON value
///
/// Malformed input is reported as a [`DecodeError`] carrying the failing
/// field path; this function never panics. A message either decodes
/// completely or fails completely.
pub fn decode_message(value: &Value) -> DecodeResult<Message> {
    let result = decode_message_value(value);
    if let Err(e) = &result {
        tracing::debug!("Failed to decode message: {}", e);
    }
    result
}

fn decode_message_value(value: &Value) -> DecodeResult<Message> {
    let object = as_object(value, "$")?;
    let role = require_str(object, "", "role")?;
    let role = MessageRole::from_wire(role)
        .ok_or_else(|| DecodeError::invalid_discriminator("role", "message role", role))?;

    match role {
        MessageRole::System => Ok(Message::System {
            content: decode_content(require(object, "", "content")?, "content")?,
        }),
        MessageRole::User => Ok(Message::User {
            content: decode_content(require(object, "", "content")?, "content")?,
        }),
        MessageRole::Assistant => {
            // Assistant content is plain text on the wire, never multi-part
            let content = require_str(object, "", "content")?.to_string();
            let tool_calls = decode_tool_calls(object.get("tool_calls"))?;
            let prefix = match object.get("prefix") {
                None => false,
                Some(Value::Bool(b)) => *b,
                Some(other) => {
                    return Err(DecodeError::type_mismatch(
                        "prefix",
                        "boolean",
                        json_type(other),
                    ));
                }
            };
            Ok(Message::Assistant {
                content,
                tool_calls,
                prefix,
            })
        }
        MessageRole::Tool => Ok(Message::Tool {
            content: decode_content(require(object, "", "content")?, "content")?,
            tool_call_id: require_str(object, "", "tool_call_id")?.to_string(),
            name: require_str(object, "", "name")?.to_string(),
        }),
    }
}

/// Decode message content from its wire form
///
/// First-match-wins alternatives: a JSON string becomes
/// [`MessageContent::Text`], a JSON array becomes [`MessageContent::Parts`]
/// with each element decoded as a content part, and anything else fails.
pub fn decode_content(value: &Value, path: &str) -> DecodeResult<MessageContent> {
    match value {
        Value::String(text) => Ok(MessageContent::Text(text.clone())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                parts.push(decode_content_part(item, &format!("{path}[{i}]"))?);
            }
            Ok(MessageContent::Parts(parts))
        }
        _ => Err(DecodeError::no_alternative(path)),
    }
}

fn decode_content_part(value: &Value, path: &str) -> DecodeResult<ContentPart> {
    let object = as_object(value, path)?;
    let tag = require_str(object, path, "type")?;
    match tag {
        "text" => Ok(ContentPart::Text(
            require_str(object, path, "text")?.to_string(),
        )),
        "image_url" => Ok(ContentPart::ImageUrl(
            require_str(object, path, "image_url")?.to_string(),
        )),
        other => Err(DecodeError::invalid_discriminator(
            field_path(path, "type"),
            "content part type",
            other,
        )),
    }
}

// ============================================================================
// Shared field helpers
// ============================================================================

/// JSON type name of a value, for type mismatch reporting
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Join a base path and a field key ("tool_calls[0]" + "id" -> "tool_calls[0].id")
pub(crate) fn field_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::type_mismatch(path, "object", json_type(value)))
}

pub(crate) fn require<'a>(
    object: &'a Map<String, Value>,
    base: &str,
    key: &str,
) -> DecodeResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| DecodeError::missing_field(field_path(base, key)))
}

pub(crate) fn require_str<'a>(
    object: &'a Map<String, Value>,
    base: &str,
    key: &str,
) -> DecodeResult<&'a str> {
    let value = require(object, base, key)?;
    value
        .as_str()
        .ok_or_else(|| DecodeError::type_mismatch(field_path(base, key), "string", json_type(value)))
}
