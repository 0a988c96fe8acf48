//! Error types for message decoding.

use thiserror::Error;

/// Everything that can go wrong while decoding a single message.
///
/// Framing variants cause a silent discard. The remaining variants are
/// reported on the output sink by the decoder and never cross the decode
/// boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Message is empty or its last character is not the terminator
    #[error("message is not terminated by '#'")]
    MissingTerminator,

    /// Message is too short to hold an opcode plus terminator
    #[error("message too short: {len} characters, need at least {min}")]
    TooShort { len: usize, min: usize },

    /// Payload is not a whole signed integer
    #[error("invalid integer: {payload:?}")]
    InvalidInteger { payload: String },

    /// Parameter list has an unpaired token
    #[error("odd parameter token count: {count}")]
    OddParameterCount { count: usize },

    /// Parameter name exceeds the maximum length
    #[error("Parameter name too long: {name}")]
    ParameterNameTooLong { name: String },

    /// Parameter value is not a decimal number
    #[error("Invalid parameter value for parameter: {name}")]
    InvalidParameterValue { name: String },
}

/// Result type for decoding operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
