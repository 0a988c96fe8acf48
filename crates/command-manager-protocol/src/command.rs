//! Typed commands decoded from framed messages.

use crate::error::ProtocolResult;
use crate::frame::Frame;
use crate::history::CommandHistory;
use crate::opcode::Opcode;
use crate::payload::{parse_integer, parse_parameters, ParameterResult};
use crate::sink::OutputSink;

/// A framed message with its payload decoded per the opcode's grammar.
///
/// Payload failures are kept inside the variant so the opcode is still
/// known, and still recorded, when its payload is bad.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunNumber(IntegerField),
    PolarNumber(IntegerField),
    UserMessage(String),
    UserFields(ProtocolResult<Vec<ParameterResult>>),
    HistoryQuery,
    Unknown(String),
}

/// An integer payload, with the raw text kept for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerField {
    pub raw: String,
    pub value: ProtocolResult<i32>,
}

impl IntegerField {
    fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: parse_integer(raw),
        }
    }

    fn emit(&self, label: &str, sink: &mut dyn OutputSink) {
        match self.value {
            Ok(n) => sink.emit_line(&format!("{} number: {}", label, n)),
            Err(_) => sink.emit_line(&format!("Invalid {} number: {}", label, self.raw)),
        }
    }
}

impl Command {
    /// Decode the payload of a framed message.
    pub fn from_frame(frame: &Frame<'_>) -> Self {
        match &frame.opcode {
            Opcode::RunNumber => Self::RunNumber(IntegerField::parse(frame.payload)),
            Opcode::PolarNumber => Self::PolarNumber(IntegerField::parse(frame.payload)),
            Opcode::UserMessage => Self::UserMessage(frame.payload.to_string()),
            Opcode::UserFields => Self::UserFields(parse_parameters(frame.payload)),
            Opcode::HistoryQuery => Self::HistoryQuery,
            Opcode::Unknown(text) => Self::Unknown(text.clone()),
        }
    }

    /// The opcode this command was decoded from.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::RunNumber(_) => Opcode::RunNumber,
            Self::PolarNumber(_) => Opcode::PolarNumber,
            Self::UserMessage(_) => Opcode::UserMessage,
            Self::UserFields(_) => Opcode::UserFields,
            Self::HistoryQuery => Opcode::HistoryQuery,
            Self::Unknown(text) => Opcode::Unknown(text.clone()),
        }
    }

    /// Write this command's output lines.
    ///
    /// The history is only read here, for the history query.
    pub fn emit(&self, history: &CommandHistory, sink: &mut dyn OutputSink) {
        match self {
            Self::RunNumber(field) => field.emit("Run", sink),
            Self::PolarNumber(field) => field.emit("Polar", sink),
            Self::UserMessage(text) => sink.emit_line(text),
            Self::UserFields(Ok(params)) => {
                for param in params {
                    match param {
                        Ok(pair) => sink.emit_line(&pair.to_string()),
                        Err(e) => sink.emit_line(&e.to_string()),
                    }
                }
            }
            // Odd token count: nothing is printed
            Self::UserFields(Err(_)) => {}
            Self::HistoryQuery => {
                for opcode in history {
                    sink.emit_line(opcode.as_str());
                }
            }
            Self::Unknown(_) => {}
        }
    }
}
