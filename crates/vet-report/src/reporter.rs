//! Routing of assertion outcomes to the console and the failure tally.

use std::io;
use std::panic::Location;

use vet_core::Tally;

use crate::console::Console;
use crate::errors::ConsoleError;
use crate::style::Palette;

/// Names the suite and case a diagnostic line belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Heading<'a> {
    /// Display name of the subject type.
    pub subject: &'a str,
    /// Rendered case description.
    pub case: &'a str,
}

/// Emits one diagnostic line per assertion and records failures.
///
/// The tally is borrowed, not ambient: callers decide whether a run accounts
/// against the process-wide tally or a local one. Console write failures are
/// sticky and surfaced once through [`Reporter::finish`]; they never stop a
/// run, matching the original behaviour of ignoring stream state.
pub struct Reporter<'c> {
    console: &'c mut dyn Console,
    tally: &'c Tally,
    palette: Palette,
    lines_emitted: usize,
    first_error: Option<io::Error>,
}

impl<'c> Reporter<'c> {
    /// Creates a reporter writing through `console` and recording failures
    /// on `tally`.
    pub fn new(console: &'c mut dyn Console, tally: &'c Tally, palette: Palette) -> Self {
        Self {
            console,
            tally,
            palette,
            lines_emitted: 0,
            first_error: None,
        }
    }

    /// The palette diagnostic fragments are styled with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The tally failures are recorded on.
    pub fn tally(&self) -> &'c Tally {
        self.tally
    }

    /// Reports one assertion outcome.
    ///
    /// A pass emits the success marker on the out channel. A failure records
    /// exactly one tally increment and emits the source location plus
    /// `detail` on the err channel. `location` is captured by the assertion
    /// call site, not here.
    pub fn assertion(
        &mut self,
        heading: Heading<'_>,
        location: &Location<'_>,
        passed: bool,
        detail: &str,
    ) {
        if passed {
            let p = &self.palette;
            let line = format!("{}{}OK!{}", self.heading_text(heading), p.success, p.reset);
            self.emit_out(line);
        } else {
            self.tally.record_failure();
            let p = &self.palette;
            let line = format!(
                "{}{}{}({}):{} {}Assertion failed! \u{274c} {}{}",
                self.heading_text(heading),
                p.location,
                location.file(),
                location.line(),
                p.reset,
                p.failure,
                p.reset,
                detail
            );
            self.emit_err(line);
        }
    }

    /// Reports a case whose procedure aborted before completing.
    ///
    /// Records one failure; no source location is available for an abort.
    pub fn case_aborted(&mut self, heading: Heading<'_>, detail: &str) {
        self.tally.record_failure();
        let p = &self.palette;
        let line = format!(
            "{}{}Assertion failed! \u{274c} {}{}",
            self.heading_text(heading),
            p.failure,
            p.reset,
            detail
        );
        self.emit_err(line);
    }

    /// Emits the blank line delimiting consecutive suites.
    pub fn separator(&mut self) {
        self.emit_out(String::new());
    }

    /// Finishes the run, returning the number of lines emitted or the first
    /// console write failure.
    pub fn finish(self) -> Result<usize, ConsoleError> {
        match self.first_error {
            None => Ok(self.lines_emitted),
            Some(source) => Err(ConsoleError::Write {
                lines_emitted: self.lines_emitted,
                source,
            }),
        }
    }

    fn heading_text(&self, heading: Heading<'_>) -> String {
        let p = &self.palette;
        format!("\t{}{}{}::{} ", p.subject, heading.subject, p.reset, heading.case)
    }

    fn emit_out(&mut self, line: String) {
        let result = self.console.write_out(&line);
        self.note(result);
    }

    fn emit_err(&mut self, line: String) {
        let result = self.console.write_err(&line);
        self.note(result);
    }

    fn note(&mut self, result: io::Result<()>) {
        match result {
            Ok(()) => self.lines_emitted += 1,
            Err(err) => {
                if self.first_error.is_none() {
                    self.first_error = Some(err);
                }
            }
        }
    }
}
