//! Message decoding entry points.

use crate::command::Command;
use crate::error::ProtocolError;
use crate::frame::Frame;
use crate::history::CommandHistory;
use crate::opcode::Opcode;
use crate::sink::OutputSink;
use tracing::{debug, trace};

/// What a single decode call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Framing failed; nothing was emitted or recorded.
    Discarded(ProtocolError),
    /// The message was framed and dispatched.
    Dispatched {
        opcode: Opcode,
        /// Whether the opcode entered the history.
        recorded: bool,
    },
}

impl Disposition {
    pub fn is_discarded(&self) -> bool {
        matches!(self, Disposition::Discarded(_))
    }
}

/// Decode one message, writing results to `sink` and recording recognized
/// opcodes in `history`.
///
/// Never fails: framing errors are discarded silently and payload errors are
/// reported on the sink.
pub fn decode(message: &str, history: &mut CommandHistory, sink: &mut dyn OutputSink) {
    process(message, history, sink);
}

fn process(
    message: &str,
    history: &mut CommandHistory,
    sink: &mut dyn OutputSink,
) -> Disposition {
    let frame = match Frame::parse(message) {
        Ok(frame) => frame,
        Err(e) => {
            debug!(error = %e, "discarding message");
            return Disposition::Discarded(e);
        }
    };

    let command = Command::from_frame(&frame);
    trace!(opcode = %frame.opcode, payload = frame.payload, "dispatching");

    command.emit(history, sink);

    let opcode = command.opcode();
    let recorded = opcode.is_recognized() && history.insert(opcode.clone());

    Disposition::Dispatched { opcode, recorded }
}

/// Single-owner wrapper holding the history for a session.
#[derive(Debug, Default)]
pub struct CommandManager {
    history: CommandHistory,
}

impl CommandManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one message against this manager's history.
    pub fn handle(&mut self, message: &str, sink: &mut dyn OutputSink) -> Disposition {
        process(message, &mut self.history, sink)
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}
