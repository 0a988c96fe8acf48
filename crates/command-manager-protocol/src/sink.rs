//! Output sinks for decoded results.

use std::io::Write;
use tracing::warn;

/// Append-only line stream that receives decoded results.
pub trait OutputSink {
    /// Append one logical line (without a trailing newline).
    fn emit_line(&mut self, line: &str);
}

impl OutputSink for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Sink that writes newline-terminated lines to any writer.
///
/// Write failures are logged and dropped; decoding never fails because of
/// the sink.
#[derive(Debug)]
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for LineWriter<W> {
    fn emit_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            warn!(error = %e, "failed to write output line");
        }
    }
}
