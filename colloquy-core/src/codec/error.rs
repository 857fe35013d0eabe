//! Decode error types with field-path reporting

use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Error returned when a JSON value does not match the wire contract
///
/// Carries the path to the field that failed (e.g.
/// `tool_calls[0].function.name`) so callers can log exactly what was wrong
/// with a service response or a stored payload. Failures about the message
/// value itself use the path `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decode failed at '{field_path}': {kind}")]
pub struct DecodeError {
    /// Path to the field that failed (e.g. "tool_calls[0].id")
    pub field_path: String,
    /// The decode failure kind
    pub kind: DecodeErrorKind,
}

/// Specific decode failure kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("required field is missing")]
    MissingField,

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid {expected}: {value:?}")]
    InvalidDiscriminator {
        expected: &'static str,
        value: String,
    },

    #[error("no alternative matched: expected a string or an array of content parts")]
    NoAlternativeMatched,
}

impl DecodeError {
    /// Create a new decode error
    pub fn new(field_path: impl Into<String>, kind: DecodeErrorKind) -> Self {
        Self {
            field_path: field_path.into(),
            kind,
        }
    }

    /// Helper to create a missing field error
    pub fn missing_field(field_path: impl Into<String>) -> Self {
        Self::new(field_path, DecodeErrorKind::MissingField)
    }

    /// Helper to create a type mismatch error
    pub fn type_mismatch(
        field_path: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::new(field_path, DecodeErrorKind::TypeMismatch { expected, actual })
    }

    /// Helper to create an invalid discriminator error
    ///
    /// `expected` names the closed set the value fell outside of, e.g.
    /// "message role" or "content part type".
    pub fn invalid_discriminator(
        field_path: impl Into<String>,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            field_path,
            DecodeErrorKind::InvalidDiscriminator {
                expected,
                value: value.into(),
            },
        )
    }

    /// Helper to create a no-alternative-matched error
    pub fn no_alternative(field_path: impl Into<String>) -> Self {
        Self::new(field_path, DecodeErrorKind::NoAlternativeMatched)
    }
}
