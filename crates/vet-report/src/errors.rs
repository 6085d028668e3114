//! Error types for the reporting layer.

use std::io;

use thiserror::Error;

/// Failure to reach the output device.
///
/// Assertion evaluation and message construction never fail; writing to the
/// console is the only fallible surface, and it is reported once per run via
/// [`crate::Reporter::finish`] rather than interrupting the cases.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The console rejected a write after the given number of good lines.
    #[error("console write failed after {lines_emitted} lines")]
    Write {
        /// Lines successfully emitted before the failure.
        lines_emitted: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
