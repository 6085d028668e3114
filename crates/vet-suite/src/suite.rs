//! Per-type suite registration and sequential execution.

use std::any::Any;
use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};

use vet_core::tally;
use vet_report::{Heading, Palette, Reporter, Stdio};

use crate::case::Case;
use crate::describe::Describe;

/// A type under test.
///
/// Implementing the trait declares both the display name and the ordered
/// test list for the type. Both are fixed at declaration: the name is an
/// associated const and the list is built exactly once when a [`Suite`] is
/// constructed, so a runnable type can never have missing metadata.
pub trait Subject {
    /// Display name used in every diagnostic line for this type.
    const NAME: &'static str;

    /// Declares the test cases, in the order they should run.
    fn suite(tests: &mut SuiteBuilder<Self>)
    where
        Self: Sized;
}

type Procedure = Box<dyn Fn(&mut Case<'_, '_>)>;

struct TestCase {
    describe: Describe,
    procedure: Procedure,
}

/// Collects test cases during suite declaration.
///
/// Cases run in the order they are added; the declared narrative is the
/// execution order, so diagnostic output reads top to bottom.
pub struct SuiteBuilder<T: ?Sized> {
    cases: Vec<TestCase>,
    _subject: PhantomData<fn(&T)>,
}

impl<T: Subject> SuiteBuilder<T> {
    fn new() -> Self {
        Self {
            cases: Vec::new(),
            _subject: PhantomData,
        }
    }

    /// Appends one test case.
    pub fn case(
        &mut self,
        describe: Describe,
        procedure: impl Fn(&mut Case<'_, '_>) + 'static,
    ) -> &mut Self {
        self.cases.push(TestCase {
            describe,
            procedure: Box::new(procedure),
        });
        self
    }
}

/// What a single [`Suite::run_with`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Test cases executed, including ones whose procedure aborted.
    pub cases_run: usize,
    /// Failures recorded on the tally during this run.
    pub failures_recorded: u32,
}

/// The registered suite for one subject type.
pub struct Suite<T: Subject> {
    cases: Vec<TestCase>,
    _subject: PhantomData<fn(&T)>,
}

impl<T: Subject> Suite<T> {
    /// Builds the suite by running the type's declaration once.
    pub fn new() -> Self {
        let mut builder = SuiteBuilder::new();
        T::suite(&mut builder);
        Self {
            cases: builder.cases,
            _subject: PhantomData,
        }
    }

    /// Number of declared cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when no cases were declared. An empty suite is legal; running
    /// it only emits the separator.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Runs every case in declaration order through `reporter`.
    ///
    /// Cases execute synchronously with no isolation between them; a case
    /// that mutates shared state affects the cases after it. A case whose
    /// procedure panics is caught, recorded as one failure with the panic
    /// payload in the diagnostic, and does not stop the cases after it.
    /// The summary says nothing about pass or fail on its own; failures are
    /// observable on the reporter's tally.
    pub fn run_with(&self, reporter: &mut Reporter<'_>) -> RunSummary {
        let failures_before = reporter.tally().count();
        for test in &self.cases {
            let case_text = test.describe.render(reporter.palette());
            let heading = Heading {
                subject: T::NAME,
                case: &case_text,
            };
            let mut case = Case::new(heading, reporter);
            let outcome = catch_unwind(AssertUnwindSafe(|| (test.procedure)(&mut case)));
            if let Err(payload) = outcome {
                reporter.case_aborted(heading, &abort_detail(payload.as_ref()));
            }
        }
        reporter.separator();
        RunSummary {
            cases_run: self.cases.len(),
            failures_recorded: reporter.tally().count() - failures_before,
        }
    }

    /// Runs against the process console and the process-wide tally.
    ///
    /// Has no failure return: assertion failures are observable only through
    /// [`vet_core::has_errors`], and console write failures are discarded
    /// here. Callers that care about the console status use
    /// [`Suite::run_with`] with their own [`Reporter`].
    pub fn run(&self) {
        let mut console = Stdio;
        let mut reporter = Reporter::new(&mut console, tally::process(), Palette::colored());
        self.run_with(&mut reporter);
        let _ = reporter.finish();
    }
}

impl<T: Subject> Default for Suite<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds and runs the suite for `T` in one call.
pub fn run<T: Subject>() {
    Suite::<T>::new().run();
}

fn abort_detail(payload: &(dyn Any + Send)) -> String {
    let message = if let Some(text) = payload.downcast_ref::<&str>() {
        *text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else {
        "non-string panic payload"
    };
    format!("test procedure panicked: {message}")
}
