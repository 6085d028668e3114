#![deny(missing_docs)]
//! Per-type test suites for the vet test library.
//!
//! A suite is declared by implementing [`Subject`] for the type under test:
//! the display name is an associated const and the ordered test list is
//! registered once inside [`Subject::suite`], so a runnable type can never
//! have undeclared metadata. Cases execute strictly in declaration order;
//! assertion failures are recorded on a [`Tally`] and never abort the run.
//!
//! ```
//! use vet_suite::{Describe, Subject, SuiteBuilder};
//!
//! struct Stack;
//!
//! impl Subject for Stack {
//!     const NAME: &'static str = "Stack";
//!
//!     fn suite(tests: &mut SuiteBuilder<Self>) {
//!         tests.case(
//!             Describe::method("push").when("the stack is empty").should("grow to one element"),
//!             |case| {
//!                 let mut items = Vec::new();
//!                 items.push(1);
//!                 case.eq(items.len(), 1);
//!             },
//!         );
//!     }
//! }
//!
//! vet_suite::run::<Stack>();
//! ```

mod case;
mod describe;
mod suite;

pub use case::Case;
pub use describe::Describe;
pub use suite::{run, RunSummary, Subject, Suite, SuiteBuilder};

pub use vet_core::{has_errors, tally, Tally, TestEq};
pub use vet_report::{Console, ConsoleError, Memory, Palette, Reporter, Stdio};
