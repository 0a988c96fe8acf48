//! Message framing: terminator check and opcode/payload split.
//!
//! Wire format:
//! ```text
//! [10 chars: opcode][N chars: payload]['#']
//! ```

use crate::error::{ProtocolError, ProtocolResult};
use crate::opcode::{Opcode, OPCODE_LEN};

/// End-of-message marker.
pub const TERMINATOR: char = '#';

/// Shortest message that can carry an opcode (opcode + terminator).
pub const MIN_MESSAGE_LEN: usize = OPCODE_LEN + 1;

/// A framed message: opcode plus terminator-stripped payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// The extracted opcode.
    pub opcode: Opcode,
    /// Payload with the trailing terminator removed.
    pub payload: &'a str,
}

impl<'a> Frame<'a> {
    /// Validate framing and split a raw message.
    ///
    /// Lengths are counted in characters.
    pub fn parse(message: &'a str) -> ProtocolResult<Self> {
        if !message.ends_with(TERMINATOR) {
            return Err(ProtocolError::MissingTerminator);
        }

        let len = message.chars().count();
        if len < MIN_MESSAGE_LEN {
            return Err(ProtocolError::TooShort {
                len,
                min: MIN_MESSAGE_LEN,
            });
        }

        // Byte offset of the first payload character; always present since len >= 11
        let split = message
            .char_indices()
            .nth(OPCODE_LEN)
            .map(|(idx, _)| idx)
            .unwrap_or(message.len());
        let (opcode_text, raw_payload) = message.split_at(split);

        let payload = raw_payload
            .strip_suffix(TERMINATOR)
            .unwrap_or(raw_payload);

        Ok(Self {
            opcode: Opcode::from_text(opcode_text),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_opcode_and_payload() {
        let frame = Frame::parse("RUN_NO____123#").unwrap();
        assert_eq!(frame.opcode, Opcode::RunNumber);
        assert_eq!(frame.payload, "123");
    }

    #[test]
    fn empty_message_is_unterminated() {
        assert_eq!(Frame::parse(""), Err(ProtocolError::MissingTerminator));
    }

    #[test]
    fn missing_terminator() {
        assert_eq!(
            Frame::parse("RUN_NO____123"),
            Err(ProtocolError::MissingTerminator)
        );
    }

    #[test]
    fn too_short() {
        assert_eq!(
            Frame::parse("RUN_NO___#"),
            Err(ProtocolError::TooShort { len: 10, min: 11 })
        );
    }

    #[test]
    fn minimum_length_has_empty_payload() {
        let frame = Frame::parse("HISTORY___#").unwrap();
        assert_eq!(frame.opcode, Opcode::HistoryQuery);
        assert_eq!(frame.payload, "");
    }

    #[test]
    fn strips_only_one_terminator() {
        let frame = Frame::parse("USR_MSG___hash##").unwrap();
        assert_eq!(frame.payload, "hash#");
    }

    #[test]
    fn terminator_inside_opcode_region() {
        let frame = Frame::parse("RUN_NO###########").unwrap();
        assert_eq!(frame.opcode, Opcode::Unknown("RUN_NO####".into()));
        assert_eq!(frame.payload, "######");
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        let frame = Frame::parse("ÄÖÜ_MSG___grüße#").unwrap();
        assert_eq!(frame.opcode, Opcode::Unknown("ÄÖÜ_MSG___".into()));
        assert_eq!(frame.payload, "grüße");

        // 10 characters but more than 10 bytes
        assert_eq!(
            Frame::parse("ÄÖÜ_MSG__#"),
            Err(ProtocolError::TooShort { len: 10, min: 11 })
        );
    }
}
