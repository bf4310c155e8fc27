//! Diagnostic transport

use core::fmt;

/// Line-oriented, best-effort text output (boot, status and error messages)
///
/// Implementations must not block waiting for a reader and may drop output.
pub trait DiagnosticLog {
    /// Emit one line; the implementation appends the line terminator
    fn line(&mut self, args: fmt::Arguments<'_>);
}
