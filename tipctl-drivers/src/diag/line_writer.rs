//! Line-oriented diagnostic output over a byte stream

use core::fmt::{self, Write as _};
use embedded_io::Write;
use heapless::String;
use tipctl_core::traits::DiagnosticLog;

/// Longest line kept; longer lines are truncated
pub const LINE_CAPACITY: usize = 64;

/// `DiagnosticLog` over any `embedded_io::Write`
///
/// Formats into a fixed line buffer and writes it with a CRLF terminator.
/// Output is best effort: write errors are counted, never propagated.
pub struct LineWriter<W> {
    writer: W,
    line: String<LINE_CAPACITY>,
    errors: u32,
}

impl<W: Write> LineWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line: String::new(),
            errors: 0,
        }
    }

    /// Number of lines that failed to write
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Get access to the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

/// Keeps whatever fits and drops the rest
struct Truncating<'a>(&'a mut String<LINE_CAPACITY>);

impl fmt::Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl<W: Write> DiagnosticLog for LineWriter<W> {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.line.clear();
        let _ = Truncating(&mut self.line).write_fmt(args);

        let result = self
            .writer
            .write_all(self.line.as_bytes())
            .and_then(|()| self.writer.write_all(b"\r\n"))
            .and_then(|()| self.writer.flush());
        if result.is_err() {
            self.errors = self.errors.wrapping_add(1);
        }
    }
}
