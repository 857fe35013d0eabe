//! Property tests for codec round-tripping
//!
//! Every constructible message must survive encode-then-decode unchanged.
//! The assistant variant holds by construction too: its content is typed as
//! plain text, so there is nothing for the encoder to normalize.

use colloquy_core::codec::{decode_message, encode_message};
use colloquy_core::protocol::*;
use proptest::prelude::*;

fn content_part_strategy() -> impl Strategy<Value = ContentPart> {
    prop_oneof![
        ".*".prop_map(ContentPart::Text),
        ".*".prop_map(ContentPart::ImageUrl),
    ]
}

fn message_content_strategy() -> impl Strategy<Value = MessageContent> {
    prop_oneof![
        ".*".prop_map(MessageContent::Text),
        prop::collection::vec(content_part_strategy(), 0..4).prop_map(MessageContent::Parts),
    ]
}

fn tool_call_strategy() -> impl Strategy<Value = ToolCall> {
    ("[a-z0-9_]{1,12}", "[a-z_]{1,8}", "[a-z_]{1,16}", ".*").prop_map(
        |(id, tool_type, name, arguments)| ToolCall {
            id,
            tool_type,
            function: FunctionCall { name, arguments },
        },
    )
}

fn message_strategy() -> impl Strategy<Value = Message> {
    prop_oneof![
        message_content_strategy().prop_map(|content| Message::System { content }),
        message_content_strategy().prop_map(|content| Message::User { content }),
        (
            ".*",
            proptest::option::of(prop::collection::vec(tool_call_strategy(), 0..3)),
            any::<bool>(),
        )
            .prop_map(|(content, tool_calls, prefix)| Message::Assistant {
                content,
                tool_calls,
                prefix,
            }),
        (message_content_strategy(), "[a-z0-9_]{1,12}", "[a-z_]{1,16}").prop_map(
            |(content, tool_call_id, name)| Message::Tool {
                content,
                tool_call_id,
                name,
            }
        ),
    ]
}

proptest! {
    #[test]
    fn prop_message_roundtrip(message in message_strategy()) {
        let encoded = encode_message(&message);
        let decoded = decode_message(&encoded).expect("encoded message must decode");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_assistant_wire_always_carries_defaults(content in ".*") {
        let encoded = encode_message(&Message::assistant(content));
        let object = encoded.as_object().expect("assistant encodes to an object");
        prop_assert_eq!(object.get("tool_calls"), Some(&serde_json::Value::Null));
        prop_assert_eq!(object.get("prefix"), Some(&serde_json::json!(false)));
    }

    #[test]
    fn prop_non_content_json_never_decodes_as_content(n in any::<i64>()) {
        let result = decode_message(&serde_json::json!({"role": "user", "content": n}));
        prop_assert!(result.is_err());
    }
}
