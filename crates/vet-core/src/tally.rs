//! Failure accounting shared across suites.

use std::sync::atomic::{AtomicU32, Ordering};

/// Count of failed assertions.
///
/// The count starts at zero and only grows; there is no reset or decrement
/// API, so the value is always the total number of failures observed since
/// the tally was created. Increments are atomic, which keeps the count
/// correct if a driver ever runs suites from more than one thread, though
/// suite ordering guarantees only hold under single-threaded execution.
#[derive(Debug)]
pub struct Tally {
    failures: AtomicU32,
}

impl Tally {
    /// Creates a tally with zero recorded failures.
    pub const fn new() -> Self {
        Self {
            failures: AtomicU32::new(0),
        }
    }

    /// Records one failed assertion.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Total failed assertions recorded so far.
    pub fn count(&self) -> u32 {
        self.failures.load(Ordering::Relaxed)
    }

    /// True once any assertion has failed.
    pub fn has_failures(&self) -> bool {
        self.count() > 0
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS: Tally = Tally::new();

/// The process-wide tally used by the convenience runners.
///
/// Reporters take an explicit `&Tally`, so this instance is only the default
/// at the outermost entry points; tests and embedding drivers can account
/// against a local tally instead.
pub fn process() -> &'static Tally {
    &PROCESS
}

/// True once any assertion anywhere in the process has failed.
///
/// Drivers query this after running their suites to choose the process exit
/// status.
pub fn has_errors() -> bool {
    PROCESS.has_failures()
}
