//! Colloquy Core Library
//!
//! This crate provides the message data model and bidirectional JSON codec
//! for the conversational protocol of chat-completion services.

pub mod codec;
pub mod protocol;

/// Returns the version of the Colloquy Core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
