//! Per-invocation configuration.
//!
//! The parsed flag value is validated once, here, and then passed explicitly
//! to the rest of the program. There is no process-global state.

use crate::error::{Error, Result};

/// Validated configuration for one action invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    sample: String,
}

impl ActionConfig {
    /// Builds the configuration from the parsed `--sample` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySample`] if the value is empty. The flag parser
    /// defaults `--sample` to the empty string, so an omitted flag fails here
    /// rather than in the parser.
    pub fn new(sample: impl Into<String>) -> Result<Self> {
        let sample = sample.into();
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        Ok(Self { sample })
    }

    /// The validated sample input.
    #[must_use]
    pub fn sample(&self) -> &str {
        &self.sample
    }
}
