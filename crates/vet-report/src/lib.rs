#![deny(missing_docs)]
//! Console diagnostics for the vet test library.
//!
//! The pieces layer bottom-up: [`style`] holds the ANSI palette, [`message`]
//! builds failure detail strings, [`console`] is the seam to the output
//! device, and [`reporter`] routes assertion outcomes to the console and the
//! failure tally.

pub mod console;
pub mod errors;
pub mod message;
pub mod reporter;
pub mod style;

pub use console::{Console, Memory, Stdio};
pub use errors::ConsoleError;
pub use message::{pointer_mismatch, range_detail, scalar_mismatch};
pub use reporter::{Heading, Reporter};
pub use style::Palette;
