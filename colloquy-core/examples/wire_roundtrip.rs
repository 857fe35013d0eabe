//! Wire Round-trip Demo
//!
//! This example demonstrates the core value proposition of Colloquy:
//! - A closed, typed message model instead of loose JSON
//! - An exact wire contract, defaults included
//! - Decode failures that name the failing field path
//!
//! Run with: cargo run --example wire_roundtrip

use colloquy_core::codec::{decode_message, encode_message};
use colloquy_core::protocol::{Message, ToolCall};
use serde_json::json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    println!("\n🚀 Colloquy Wire Round-trip Demo\n");
    println!("=================================\n");

    let conversation = vec![
        Message::system("You are a helpful weather assistant"),
        Message::user("What's the weather in Paris?"),
        Message::assistant_with_tools(
            "",
            vec![ToolCall::function(
                "call_0",
                "get_weather",
                "{\"city\": \"Paris\"}",
            )],
        ),
        Message::tool("call_0", "get_weather", "22C, sunny"),
        Message::assistant("It's 22C and sunny in Paris."),
    ];

    println!("📤 Encoded wire bodies:");
    for message in &conversation {
        let encoded = encode_message(message);
        println!("  {}", encoded);

        let decoded = decode_message(&encoded).expect("round-trip decode");
        assert_eq!(&decoded, message);
    }
    println!("\n✅ All {} messages round-tripped unchanged", conversation.len());

    println!("\n📥 Decoding a malformed service response:");
    let malformed = json!({
        "role": "assistant",
        "content": "",
        "tool_calls": [{"id": "call_1", "function": {"name": "get_weather"}}],
    });
    match decode_message(&malformed) {
        Ok(_) => println!("  unexpectedly decoded"),
        Err(e) => println!("  ❌ {}", e),
    }
    println!();
}
