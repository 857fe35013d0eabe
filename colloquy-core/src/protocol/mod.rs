//! Protocol module for conversational message structures
//!
//! This module defines the typed data model exchanged with a chat-completion
//! service. These structures are designed to be:
//! - Closed unions, so adding a role or content kind is a compile-time-visible change
//! - Immutable value types with no shared state
//! - Exact about the wire contract, which is enforced by the codec module

pub mod types;

pub use types::{ContentPart, FunctionCall, Message, MessageContent, MessageRole, ToolCall};
