//! Narrative description attached to each test case.

use std::fmt;

use vet_report::Palette;

/// Three-part description of a test case: the operation exercised, the
/// situation it is exercised in, and the expected outcome.
///
/// Immutable once attached to a case. Reads as the original narrative:
/// `method() should <expectation> when <situation>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Describe {
    method: String,
    situation: String,
    expectation: String,
}

impl Describe {
    /// Starts a description from the name of the operation under test.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            method: name.into(),
            situation: String::new(),
            expectation: String::new(),
        }
    }

    /// Sets the situation fragment.
    pub fn when(mut self, situation: impl Into<String>) -> Self {
        self.situation = situation.into();
        self
    }

    /// Sets the expected-outcome fragment.
    pub fn should(mut self, expectation: impl Into<String>) -> Self {
        self.expectation = expectation.into();
        self
    }

    /// Renders the description with `palette` emphasis on the method name.
    pub fn render(&self, palette: &Palette) -> String {
        format!(
            "{}{}(){} should {} when {}",
            palette.bold, self.method, palette.reset, self.expectation, self.situation
        )
    }
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}() should {} when {}",
            self.method, self.expectation, self.situation
        )
    }
}
