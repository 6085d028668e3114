#![deny(missing_docs)]
#![doc = "Comparison engine and failure accounting for the vet test library. Assertions in vet-suite compare values through [`TestEq`] and record failed comparisons on a [`Tally`]."]

pub mod compare;
pub mod tally;

pub use compare::{TestEq, F32_TOLERANCE, F64_TOLERANCE};
pub use tally::{has_errors, Tally};
