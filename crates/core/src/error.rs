//! Error types for the sample-action-core crate

use miette::Diagnostic;
use thiserror::Error;

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sample-action operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The required `--sample` flag was empty or missing
    #[error("--sample can't be empty")]
    #[diagnostic(
        code(sample_action::config::empty_sample),
        help("pass a non-empty value, e.g. `--sample foo`")
    )]
    EmptySample,

    /// Writing to the output stream failed
    #[error("failed to write output: {source}")]
    #[diagnostic(code(sample_action::output::io))]
    Output {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
