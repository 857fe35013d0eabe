//! Core protocol types for chat-completion messages
//!
//! This module contains the fundamental data structures used for
//! communication with a chat-completion service. The design prioritizes:
//! - Type safety through closed enums and strong typing
//! - One variant per message role, so the role never desynchronizes from the shape
//! - Plain text assistant content, enforced at construction time

use serde::{Deserialize, Serialize};

/// Role of a message in the conversation
///
/// On the wire this is the `role` discriminator string. The typed
/// [`Message`] does not carry it as a field; the variant tag encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions that guide the model's behavior
    System,
    /// User input message
    User,
    /// Assistant (model) response
    Assistant,
    /// Result of a tool invocation requested by the assistant
    Tool,
}

impl MessageRole {
    /// Wire discriminator string for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Tool => "tool",
        }
    }

    /// Parse a wire discriminator string, `None` if outside the closed set
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "system" => Some(MessageRole::System),
            "user" => Some(MessageRole::User),
            "assistant" => Some(MessageRole::Assistant),
            "tool" => Some(MessageRole::Tool),
            _ => None,
        }
    }
}

/// A message in the conversation
///
/// Assistant messages are asymmetric with the other roles: their content is
/// always plain text, and only they carry tool calls and the `prefix` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// System instructions that guide the model's behavior
    System {
        /// Content of the message
        content: MessageContent,
    },
    /// User input message
    User {
        /// Content of the message
        content: MessageContent,
    },
    /// Assistant (model) response
    Assistant {
        /// Plain text content (never multi-part)
        content: String,
        /// Tool invocations requested by the assistant, in order
        tool_calls: Option<Vec<ToolCall>>,
        /// Whether the content is a prefix the model must continue from
        prefix: bool,
    },
    /// Result of a tool invocation
    Tool {
        /// Content of the message
        content: MessageContent,
        /// Identifier of the tool call this message answers
        tool_call_id: String,
        /// Name of the invoked tool
        name: String,
    },
}

/// Content of a message - plain text or structured parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Structured content parts (for multimodal messages)
    Parts(Vec<ContentPart>),
}

/// Individual content part for multimodal messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// Text content part
    Text(String),
    /// Image reference, either a URL or a base64-encoded image string,
    /// carried opaquely
    ImageUrl(String),
}

/// Tool call information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Type of tool (usually "function")
    pub tool_type: String,
    /// Function information
    pub function: FunctionCall,
}

/// Function call information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Name of the function to call
    pub name: String,
    /// Arguments to the function (usually JSON string)
    pub arguments: String,
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<MessageContent>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    /// Create an assistant message with plain text content
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: content.into(),
            tool_calls: None,
            prefix: false,
        }
    }

    /// Create an assistant message that requests tool invocations
    pub fn assistant_with_tools(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Message::Assistant {
            content: content.into(),
            tool_calls: Some(tool_calls),
            prefix: false,
        }
    }

    /// Create a tool response message
    pub fn tool(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<MessageContent>,
    ) -> Self {
        Message::Tool {
            content: content.into(),
            tool_call_id: tool_call_id.into(),
            name: name.into(),
        }
    }

    /// Role of this message
    pub fn role(&self) -> MessageRole {
        match self {
            Message::System { .. } => MessageRole::System,
            Message::User { .. } => MessageRole::User,
            Message::Assistant { .. } => MessageRole::Assistant,
            Message::Tool { .. } => MessageRole::Tool,
        }
    }
}

impl ToolCall {
    /// Create a function tool call
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tool_type: "function".to_string(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

impl MessageContent {
    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        match self {
            MessageContent::Text(s) => s.is_empty(),
            MessageContent::Parts(parts) => parts.is_empty(),
        }
    }

    /// Get text representation
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(s) => Some(s.as_str()),
            MessageContent::Parts(_) => None,
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(parts: Vec<ContentPart>) -> Self {
        MessageContent::Parts(parts)
    }
}
