//! Assertion context handed to each test procedure.

use std::fmt::Display;
use std::panic::Location;

use vet_core::TestEq;
use vet_report::{pointer_mismatch, range_detail, scalar_mismatch, Heading, Reporter};

/// Context for one executing test case.
///
/// Each assertion emits exactly one diagnostic line and records at most one
/// failure on the tally. All assertions are `#[track_caller]`, so the line
/// reported on failure is the test author's call site.
pub struct Case<'r, 'c> {
    heading: Heading<'r>,
    reporter: &'r mut Reporter<'c>,
}

impl<'r, 'c> Case<'r, 'c> {
    pub(crate) fn new(heading: Heading<'r>, reporter: &'r mut Reporter<'c>) -> Self {
        Self { heading, reporter }
    }

    /// Asserts that `actual` equals `expected` under the type's comparison
    /// policy (exact for most types, tolerance for floats).
    #[track_caller]
    pub fn eq<T: TestEq + Display>(&mut self, actual: T, expected: T) {
        let location = Location::caller();
        let passed = actual.test_eq(&expected);
        let detail = if passed {
            String::new()
        } else {
            scalar_mismatch(&expected, &actual)
        };
        self.reporter.assertion(self.heading, location, passed, &detail);
    }

    /// Asserts that `value` is true.
    #[track_caller]
    pub fn is_true(&mut self, value: bool) {
        self.eq(value, true);
    }

    /// Asserts that `value` is false.
    #[track_caller]
    pub fn is_false(&mut self, value: bool) {
        self.eq(value, false);
    }

    /// Asserts that two references point at the same value.
    #[track_caller]
    pub fn same<T: ?Sized>(&mut self, actual: &T, expected: &T) {
        let location = Location::caller();
        let passed = std::ptr::eq(actual, expected);
        let detail = if passed {
            String::new()
        } else {
            pointer_mismatch(expected, actual)
        };
        self.reporter.assertion(self.heading, location, passed, &detail);
    }

    /// Compares `actual` against `expected` over the index range
    /// `[start, end)` as one assertion.
    ///
    /// Every mismatching index contributes a line to the failure detail. An
    /// empty range passes vacuously, and indices beyond either slice are not
    /// compared, so partial-range checks are safe.
    #[track_caller]
    pub fn in_range<T: TestEq + Display>(
        &mut self,
        actual: &[T],
        expected: &[T],
        start: usize,
        end: usize,
    ) {
        let location = Location::caller();
        match range_detail(actual, expected, start, end) {
            None => self.reporter.assertion(self.heading, location, true, ""),
            Some(detail) => self.reporter.assertion(self.heading, location, false, &detail),
        }
    }

    /// Records an externally evaluated condition with its own failure detail.
    #[track_caller]
    pub fn check(&mut self, passed: bool, detail: impl Display) {
        let location = Location::caller();
        let detail = if passed {
            String::new()
        } else {
            detail.to_string()
        };
        self.reporter.assertion(self.heading, location, passed, &detail);
    }
}
