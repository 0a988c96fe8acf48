//! Line-oriented console session.
//!
//! Feeds one message per input line to the decoder. The demo and the
//! interactive input share a single history.

use crate::demo::{DEMO_BANNER, DEMO_MESSAGES};
use crate::error::ConsoleResult;
use command_manager_protocol::{
    CommandHistory, CommandManager, Disposition, LineWriter, OutputSink,
};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompt printed before reading interactive input.
pub fn input_prompt(exit_keyword: &str) -> String {
    format!("Enter command messages (type {} to quit):", exit_keyword)
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub received: usize,
    pub discarded: usize,
    pub recorded: usize,
}

impl SessionStats {
    fn record(&mut self, disposition: &Disposition) {
        self.received += 1;
        if disposition.is_discarded() {
            self.discarded += 1;
        } else if let Disposition::Dispatched { recorded: true, .. } = disposition {
            self.recorded += 1;
        }
    }
}

/// A console session writing decoded output to `W`.
pub struct Console<W: Write> {
    manager: CommandManager,
    output: LineWriter<W>,
    exit_keyword: String,
    stats: SessionStats,
}

impl<W: Write> Console<W> {
    pub fn new(output: W, exit_keyword: impl Into<String>) -> Self {
        Self {
            manager: CommandManager::new(),
            output: LineWriter::new(output),
            exit_keyword: exit_keyword.into(),
            stats: SessionStats::default(),
        }
    }

    /// Decode a single message.
    pub fn submit(&mut self, message: &str) -> Disposition {
        let disposition = self.manager.handle(message, &mut self.output);
        match &disposition {
            Disposition::Discarded(reason) => {
                debug!(input = message, reason = %reason, "message discarded");
            }
            Disposition::Dispatched { opcode, recorded } => {
                debug!(input = message, opcode = %opcode, recorded, "message dispatched");
            }
        }
        self.stats.record(&disposition);
        disposition
    }

    /// Print the banner and run the example messages.
    pub fn run_demo(&mut self) -> ConsoleResult<()> {
        info!(count = DEMO_MESSAGES.len(), "running demo messages");
        self.output.emit_line(DEMO_BANNER);
        self.output.emit_line("");
        for message in DEMO_MESSAGES {
            self.submit(message);
        }
        self.output.flush()?;
        Ok(())
    }

    /// Decode lines from `input` until the exit keyword or end of input.
    ///
    /// Lines are read as bytes; invalid UTF-8 is replaced rather than ending
    /// the session, so such a line is decoded (and usually discarded) like
    /// any other.
    pub fn run_lines<R: BufRead>(&mut self, mut input: R) -> ConsoleResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let message = line.trim_end_matches(['\r', '\n']);
            if message == self.exit_keyword {
                info!("exit keyword received");
                break;
            }
            self.submit(message);
            self.output.flush()?;
        }
        Ok(())
    }

    /// Print the prompt, then read interactive input.
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> ConsoleResult<()> {
        let prompt = input_prompt(&self.exit_keyword);
        self.output.emit_line(&prompt);
        self.output.flush()?;
        self.run_lines(input)
    }

    pub fn history(&self) -> &CommandHistory {
        self.manager.history()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}
