//! Seam between the reporter and the process output device.

use std::io::{self, Write};

/// Where diagnostic lines go.
///
/// Passing lines and suite separators use the out channel, failures the err
/// channel, mirroring the stdout/stderr split of a conventional test binary.
pub trait Console {
    /// Writes one line to the out channel.
    fn write_out(&mut self, line: &str) -> io::Result<()>;

    /// Writes one line to the err channel.
    fn write_err(&mut self, line: &str) -> io::Result<()>;
}

/// The real process console: out lines to stdout, err lines to stderr.
#[derive(Debug, Default)]
pub struct Stdio;

impl Console for Stdio {
    fn write_out(&mut self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}")
    }

    fn write_err(&mut self, line: &str) -> io::Result<()> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{line}")
    }
}

/// In-memory capture device used by tests and embedding drivers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Memory {
    /// Everything written to the out channel, newline terminated per line.
    pub out: String,
    /// Everything written to the err channel, newline terminated per line.
    pub err: String,
}

impl Console for Memory {
    fn write_out(&mut self, line: &str) -> io::Result<()> {
        self.out.push_str(line);
        self.out.push('\n');
        Ok(())
    }

    fn write_err(&mut self, line: &str) -> io::Result<()> {
        self.err.push_str(line);
        self.err.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_keeps_channels_separate() {
        let mut console = Memory::default();
        console.write_out("pass").unwrap();
        console.write_err("fail").unwrap();
        console.write_out("").unwrap();
        assert_eq!(console.out, "pass\n\n");
        assert_eq!(console.err, "fail\n");
    }
}
