//! Encoding of typed messages to service JSON
//!
//! Mirrors the decoder's wire shape exactly. Encoding is total: every
//! constructible message encodes, and all constraints are enforced by the
//! type system at construction time.

use serde_json::{json, Map, Value};

use crate::codec::tool_calls::encode_tool_calls;
use crate::protocol::{ContentPart, Message, MessageContent};

/// Encode a message to the wire shape the service expects
///
/// Assistant messages always carry `tool_calls` (`null` when there are
/// none) and `prefix`, even at their defaults. The service's expected shape
/// is treated as exact, so default fields are not omitted.
pub fn encode_message(message: &Message) -> Value {
    let mut object = Map::new();
    object.insert("role".to_string(), json!(message.role().as_str()));

    match message {
        Message::System { content } | Message::User { content } => {
            object.insert("content".to_string(), encode_content(content));
        }
        Message::Assistant {
            content,
            tool_calls,
            prefix,
        } => {
            object.insert("content".to_string(), json!(content));
            object.insert(
                "tool_calls".to_string(),
                encode_tool_calls(tool_calls.as_deref()),
            );
            object.insert("prefix".to_string(), json!(prefix));
        }
        Message::Tool {
            content,
            tool_call_id,
            name,
        } => {
            object.insert("content".to_string(), encode_content(content));
            object.insert("tool_call_id".to_string(), json!(tool_call_id));
            object.insert("name".to_string(), json!(name));
        }
    }

    Value::Object(object)
}

/// Encode message content to its wire form
pub fn encode_content(content: &MessageContent) -> Value {
    match content {
        MessageContent::Text(text) => json!(text),
        MessageContent::Parts(parts) => {
            Value::Array(parts.iter().map(encode_content_part).collect())
        }
    }
}

fn encode_content_part(part: &ContentPart) -> Value {
    match part {
        ContentPart::Text(text) => json!({
            "type": "text",
            "text": text,
        }),
        ContentPart::ImageUrl(image_url) => json!({
            "type": "image_url",
            "image_url": image_url,
        }),
    }
}
