//! Bidirectional JSON codec for the message protocol
//!
//! This module converts between the typed [`crate::protocol`] model and the
//! exact JSON wire shape of the chat-completion service. Both directions are
//! pure functions with no I/O and no shared state, safe to call from any
//! number of threads:
//! - [`decode_message`] turns an untrusted JSON value into a [`crate::protocol::Message`]
//!   or a [`DecodeError`] naming the failing field path
//! - [`encode_message`] is total and reproduces the wire shape the decoder
//!   accepts, including fields that are emitted even at their defaults

pub mod decode;
pub mod encode;
pub mod error;
pub mod tool_calls;

pub use decode::{decode_content, decode_message};
pub use encode::{encode_content, encode_message};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use tool_calls::{decode_tool_call, decode_tool_calls, encode_tool_call, encode_tool_calls};
