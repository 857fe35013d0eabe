//! Codec for tool-call values attached to assistant messages
//!
//! The wire treats an absent `tool_calls` field and an explicit `null` the
//! same way, and the encoder emits `null` rather than omitting the field, so
//! the optional-sequence handling lives here next to the per-element codec.

use serde_json::{json, Value};

use crate::codec::decode::{as_object, field_path, json_type, require, require_str};
use crate::codec::error::{DecodeError, DecodeResult};
use crate::protocol::{FunctionCall, ToolCall};

/// Tool type assumed when the wire omits `type`
const DEFAULT_TOOL_TYPE: &str = "function";

/// Decode the optional `tool_calls` field of an assistant message
///
/// Absent and `null` both decode to `None`; an array decodes per element
/// with indexed field paths; any other shape is a type mismatch.
pub fn decode_tool_calls(field: Option<&Value>) -> DecodeResult<Option<Vec<ToolCall>>> {
    match field {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut calls = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                calls.push(decode_tool_call(item, &format!("tool_calls[{i}]"))?);
            }
            Ok(Some(calls))
        }
        Some(other) => Err(DecodeError::type_mismatch(
            "tool_calls",
            "array or null",
            json_type(other),
        )),
    }
}

/// Decode a single tool call at the given field path
pub fn decode_tool_call(value: &Value, path: &str) -> DecodeResult<ToolCall> {
    let object = as_object(value, path)?;
    let id = require_str(object, path, "id")?.to_string();
    let tool_type = match object.get("type") {
        None => DEFAULT_TOOL_TYPE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(DecodeError::type_mismatch(
                field_path(path, "type"),
                "string",
                json_type(other),
            ));
        }
    };
    let function_path = field_path(path, "function");
    let function = as_object(require(object, path, "function")?, &function_path)?;
    let function = FunctionCall {
        name: require_str(function, &function_path, "name")?.to_string(),
        arguments: require_str(function, &function_path, "arguments")?.to_string(),
    };
    Ok(ToolCall {
        id,
        tool_type,
        function,
    })
}

/// Encode a single tool call
pub fn encode_tool_call(call: &ToolCall) -> Value {
    json!({
        "id": call.id,
        "type": call.tool_type,
        "function": {
            "name": call.function.name,
            "arguments": call.function.arguments,
        },
    })
}

/// Encode the optional tool-call list, `null` when there are none
pub fn encode_tool_calls(calls: Option<&[ToolCall]>) -> Value {
    match calls {
        None => Value::Null,
        Some(calls) => Value::Array(calls.iter().map(encode_tool_call).collect()),
    }
}
